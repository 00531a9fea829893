//! Inline span rendering
//!
//! Single left-to-right pass over one line body. At each marker the
//! tokenizer looks for the matching closer and emits the span, so the
//! order of the rules never matters:
//!
//! - `` `code` `` -> `<code>code</code>`, contents kept literal
//! - `**bold**` -> `<strong>bold</strong>`
//! - `*italic*` -> `<em>italic</em>`
//!
//! A marker without a closer is emitted as literal text. Spans never
//! cross lines because the caller feeds one line at a time.

/// Render the inline spans of a single line
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    render_into(text, &mut out);
    out
}

fn render_into(text: &str, out: &mut String) {
    let mut rest = text;

    while let Some(pos) = rest.find(|c: char| c == '*' || c == '`') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix('`') {
            match closer(after, "`") {
                Some(end) => {
                    push_span(out, "code", &after[..end], false);
                    rest = &after[end + 1..];
                }
                None => {
                    out.push('`');
                    rest = after;
                }
            }
            continue;
        }

        if let Some(after) = tail.strip_prefix("**") {
            if let Some(end) = closer(after, "**") {
                push_span(out, "strong", &after[..end], true);
                rest = &after[end + 2..];
                continue;
            }
        }

        let after = &tail[1..];
        match closer(after, "*") {
            Some(end) => {
                push_span(out, "em", &after[..end], true);
                rest = &after[end + 1..];
            }
            None => {
                out.push('*');
                rest = after;
            }
        }
    }

    out.push_str(rest);
}

/// Byte offset of the closing marker, if the span it closes is non-empty
fn closer(after: &str, marker: &str) -> Option<usize> {
    after.find(marker).filter(|&end| end > 0)
}

fn push_span(out: &mut String, tag: &str, body: &str, nested: bool) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    if nested {
        render_into(body, out);
    } else {
        out.push_str(body);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            render_inline("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_two_bold_spans_stay_separate() {
        assert_eq!(
            render_inline("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_code_contents_are_literal() {
        assert_eq!(render_inline("run `a*b*c` now"), "run <code>a*b*c</code> now");
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(
            render_inline("**very *much* so**"),
            "<strong>very <em>much</em> so</strong>"
        );
    }

    #[test]
    fn test_unmatched_markers_are_literal() {
        assert_eq!(render_inline("**oops"), "**oops");
        assert_eq!(render_inline("2 * 3"), "2 * 3");
        assert_eq!(render_inline("tick ` alone"), "tick ` alone");
        assert_eq!(render_inline("****"), "****");
    }

    #[test]
    fn test_non_ascii_text_around_spans() {
        assert_eq!(
            render_inline("🔧 **Hardware**: è *già* qui"),
            "🔧 <strong>Hardware</strong>: è <em>già</em> qui"
        );
    }
}
