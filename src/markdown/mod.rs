//! Markdown to HTML rendering
//!
//! Renders the small markdown subset used by the site's content files:
//! headings (levels 1-3), bold, italic, inline code, `- ` list items and
//! blank-line paragraph breaks.
//!
//! Each line is classified once, then its body goes through the inline
//! tokenizer. Consecutive text lines form one `<p>` block; headings, list
//! items, blank lines and lines that already start with an `<h`, `<l` or
//! `<p` tag close it. Tagged lines are emitted as they are, never wrapped.
//!
//! Known limitations:
//!
//! - list items are emitted as bare `<li>` elements, with no `<ul>`
//! - input is trusted: raw HTML passes through unescaped
//! - re-rendering marker-free output is stable only for single-line
//!   paragraphs; the continuation lines of a multi-line `<p>` are untagged
//!   and get wrapped again

pub mod inline;
pub mod lines;

pub use inline::render_inline;
pub use lines::{classify, Line};

/// Render markdown text to an HTML fragment. Never fails.
pub fn render(markdown: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for raw in markdown.lines() {
        match classify(raw) {
            Line::Heading { level, body } => {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(format!("<h{level}>{}</h{level}>", render_inline(body)));
            }
            Line::ListItem(body) => {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(format!("<li>{}</li>", render_inline(body)));
            }
            Line::Tagged(body) => {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(render_inline(body));
            }
            Line::Blank => flush_paragraph(&mut paragraph, &mut blocks),
            Line::Text(body) => paragraph.push(render_inline(body)),
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    blocks.join("\n")
}

fn flush_paragraph(paragraph: &mut Vec<String>, blocks: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    blocks.push(format!("<p>{}</p>", paragraph.join("\n")));
    paragraph.clear();
}

/// Markdown → HTML seam used by the content loader
pub trait Renderer {
    fn render(&self, markdown: &str) -> String;
}

/// The built-in renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        render(markdown)
    }
}
