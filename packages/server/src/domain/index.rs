//! Similarity search over the chunks of the processed page.
//!
//! Every chunk is stored with its embedding; a question is answered from
//! the chunks whose embeddings are closest to the question's embedding by
//! cosine similarity.

use super::Chunk;

/// Number of chunks handed to the language model per question
pub const DEFAULT_TOP_K: usize = 4;

#[derive(Debug)]
struct IndexedChunk {
    chunk: Chunk,
    embedding: Vec<f32>,
}

/// Searchable set of embedded chunks
#[derive(Debug)]
pub struct ChunkIndex {
    entries: Vec<IndexedChunk>,
}

impl ChunkIndex {
    /// Pair each chunk with the embedding at the same position.
    ///
    /// Callers pass one embedding per chunk; surplus items on either side
    /// are dropped.
    pub fn build(chunks: Vec<Chunk>, embeddings: Vec<Vec<f32>>) -> Self {
        if chunks.len() != embeddings.len() {
            tracing::warn!(
                "Indexing {} chunks with {} embeddings",
                chunks.len(),
                embeddings.len()
            );
        }

        let entries = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexedChunk { chunk, embedding })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return up to `k` chunks, most similar to `query_embedding` first.
    ///
    /// Chunks with equal scores keep their document order.
    pub fn search(&self, query_embedding: &[f32], k: usize) -> Vec<&Chunk> {
        let mut scored: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                (position, cosine_similarity(query_embedding, &entry.embedding))
            })
            .collect();

        // stable: ties stay in document order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(k)
            .map(|(position, _)| &self.entries[position].chunk)
            .collect()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
