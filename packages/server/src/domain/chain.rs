//! Question answering chain: retrieval followed by a prompted completion.

use super::ChunkIndex;

/// System prompt of every question; `{context}` is replaced with the
/// retrieved passages.
pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are an assistant for question-answering tasks. \
     Use the following pieces of retrieved context to answer \
     the question. If you don't know the answer, say that you \
     don't know. Use three sentences maximum and keep the \
     answer concise.\
     \n\n\
     {context}";

/// Messages sent to the language model for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Chain built from the last processed page
#[derive(Debug)]
pub struct QaChain {
    source: String,
    index: ChunkIndex,
}

impl QaChain {
    pub fn new(source: impl Into<String>, index: ChunkIndex) -> Self {
        Self {
            source: source.into(),
            index,
        }
    }

    /// URL the chain was built from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }

    /// Build the prompt for `question` from the `top_k` chunks closest to
    /// `question_embedding`
    pub fn prompt(&self, question: &str, question_embedding: &[f32], top_k: usize) -> Prompt {
        let context = self
            .index
            .search(question_embedding, top_k)
            .iter()
            .map(|chunk| chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        Prompt {
            system: SYSTEM_PROMPT_TEMPLATE.replace("{context}", &context),
            user: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Chunk;

    #[test]
    fn test_prompt_contains_retrieved_context() {
        // テスト項目: プロンプトに関連するチャンクと質問が含まれる
        // given (前提条件):
        let index = ChunkIndex::build(
            vec![
                Chunk {
                    source: "https://example.com".to_string(),
                    content: "Unrelated paragraph.".to_string(),
                },
                Chunk {
                    source: "https://example.com".to_string(),
                    content: "Ferris is the mascot of Rust.".to_string(),
                },
            ],
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        );
        let chain = QaChain::new("https://example.com", index);

        // when (操作):
        let prompt = chain.prompt("Who is Ferris?", &[0.1, 0.9], 1);

        // then (期待する結果):
        assert!(prompt.system.starts_with("You are an assistant for question-answering tasks."));
        assert!(prompt.system.ends_with("\n\nFerris is the mascot of Rust."));
        assert!(!prompt.system.contains("Unrelated paragraph."));
        assert!(!prompt.system.contains("{context}"));
        assert_eq!(prompt.user, "Who is Ferris?");
        assert_eq!(chain.chunk_count(), 2);
    }
}
