//! Plain-text extraction from HTML pages.
//!
//! The page is parsed with html5ever into an `RcDom` and its text nodes are
//! collected in document order. The contents of `script`, `style`,
//! `noscript` and `template` elements are skipped. Block-level elements are
//! surrounded by line breaks, so consecutive blocks end up separated by a
//! blank line the splitter can cut on.

use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

const BLOCK_ELEMENTS: [&str; 27] = [
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "title", "tr",
];

const CELL_ELEMENTS: [&str; 2] = ["td", "th"];

/// Extract the visible text of an HTML document
pub fn extract_text(html: &str) -> String {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let mut raw = String::with_capacity(html.len());
    collect_text(&dom.document, false, &mut raw);

    normalize_whitespace(&raw)
}

/// Append the text below `node` to `out`.
///
/// Outside `pre`, line breaks in text nodes are source formatting and are
/// turned into spaces; lines come from the element structure only.
fn collect_text(node: &Handle, preformatted: bool, out: &mut String) {
    match &node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                collect_text(child, preformatted, out);
            }
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            if preformatted {
                out.push_str(&text);
            } else {
                out.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
            }
        }
        NodeData::Element { name, .. } => {
            let tag: &str = &name.local;
            if SKIPPED_ELEMENTS.contains(&tag) {
                return;
            }
            if tag == "br" {
                out.push('\n');
                return;
            }

            let separator = if BLOCK_ELEMENTS.contains(&tag) {
                Some('\n')
            } else if CELL_ELEMENTS.contains(&tag) {
                Some(' ')
            } else {
                None
            };
            let preformatted = preformatted || tag == "pre";

            out.extend(separator);
            for child in node.children.borrow().iter() {
                collect_text(child, preformatted, out);
            }
            out.extend(separator);
        }
        // comments, doctype, processing instructions
        _ => {}
    }
}

/// Collapse whitespace inside lines, drop empty lines and keep one blank
/// line wherever blank lines separated two blocks
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_pending = false;

    for line in text.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            blank_pending = true;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank_pending { "\n\n" } else { "\n" });
        }
        out.push_str(&line);
        blank_pending = false;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_paragraphs() {
        // テスト項目: 段落ごとのテキストが空行区切りで取り出される
        // given (前提条件):
        let html = "<html><head><title>Rust</title></head>\
                    <body><h1>Hello</h1><p>First <b>bold</b> paragraph.</p><p>Second</p></body></html>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "Rust\n\nHello\n\nFirst bold paragraph.\n\nSecond");
    }

    #[test]
    fn test_extract_text_skips_scripts_styles_and_comments() {
        // テスト項目: script, style, noscript の中身とコメントが除外される
        // given (前提条件):
        let html = "<p>visible</p><script type=\"text/javascript\">var x = '<p>hidden</p>';</script>\
                    <STYLE>p { color: red; }</STYLE><!-- <p>comment</p> -->\
                    <noscript>enable javascript</noscript><p>also visible</p>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "visible\n\nalso visible");
    }

    #[test]
    fn test_extract_text_keeps_angle_brackets_in_text() {
        // テスト項目: タグではない < と > を含むテキストが失われない
        // given (前提条件):
        let html = "<p>1 < 2 and 3 > 2</p><p>x < y is true</p>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "1 < 2 and 3 > 2\n\nx < y is true");
    }

    #[test]
    fn test_extract_text_ignores_attribute_values() {
        // テスト項目: 属性値に含まれる > が本文に漏れない
        // given (前提条件):
        let html = r#"<a title="a>b" href="/x?y>z">link</a> tail"#;

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "link tail");
    }

    #[test]
    fn test_extract_text_line_breaks() {
        // テスト項目: br は改行になり、ソース上の改行と空白は 1 つの空白にまとめられる
        // given (前提条件):
        let html = "<div>line   one<br>line\ttwo\n  continues</div>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "line one\nline two continues");
    }

    #[test]
    fn test_extract_text_preformatted_keeps_lines() {
        // テスト項目: pre の中の改行が保持される
        // given (前提条件):
        let html = "<pre>fn main() {\n    run();\n}</pre>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "fn main() {\nrun();\n}");
    }

    #[test]
    fn test_extract_text_table_cells() {
        // テスト項目: 表のセルが空白区切り、行が改行区切りになる
        // given (前提条件):
        let html = "<table><tr><th>name</th><th>kind</th></tr><tr><td>Ferris</td><td>crab</td></tr></table>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "name kind\n\nFerris crab");
    }

    #[test]
    fn test_extract_text_decodes_entities() {
        // テスト項目: 文字参照がデコードされ、不明なものはそのまま残る
        // given (前提条件):
        let html = "<p>a &amp; b &lt;c&gt; &#65;&#x42; &unknown; AT&T</p>";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "a & b <c> AB &unknown; AT&T");
    }

    #[test]
    fn test_extract_text_plain_text_passthrough() {
        // テスト項目: タグを含まないテキストはそのまま返される
        // given (前提条件):
        let html = "just text";

        // when (操作):
        let text = extract_text(html);

        // then (期待する結果):
        assert_eq!(text, "just text");
    }
}
