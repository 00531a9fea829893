//! Line classification

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,3}) (.*)$").expect("heading pattern is valid"));

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- (.*)$").expect("list item pattern is valid"));

static TAGGED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<[hlp]").expect("tagged line pattern is valid"));

/// What a single source line is, with its body (markers stripped)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `#`, `##` or `###` followed by a space
    Heading { level: u8, body: &'a str },
    /// `- ` prefix
    ListItem(&'a str),
    /// Already starts with an `<h..>`, `<l..>` or `<p..>` tag
    Tagged(&'a str),
    /// Empty or whitespace only
    Blank,
    /// Anything else, including other raw HTML
    Text(&'a str),
}

pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = HEADING.captures(line) {
        if let (Some(hashes), Some(body)) = (caps.get(1), caps.get(2)) {
            return Line::Heading {
                level: hashes.as_str().len() as u8,
                body: body.as_str(),
            };
        }
    }

    if let Some(body) = LIST_ITEM.captures(line).and_then(|caps| caps.get(1)) {
        return Line::ListItem(body.as_str());
    }

    if TAGGED.is_match(line) {
        return Line::Tagged(line);
    }

    Line::Text(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# A"), Line::Heading { level: 1, body: "A" });
        assert_eq!(classify("## B c"), Line::Heading { level: 2, body: "B c" });
        assert_eq!(classify("### D"), Line::Heading { level: 3, body: "D" });
    }

    #[test]
    fn test_not_headings() {
        assert_eq!(classify("#### deep"), Line::Text("#### deep"));
        assert_eq!(classify("#nospace"), Line::Text("#nospace"));
        assert_eq!(classify(" # indented"), Line::Text(" # indented"));
    }

    #[test]
    fn test_list_item_and_blank() {
        assert_eq!(classify("- item"), Line::ListItem("item"));
        assert_eq!(classify("-item"), Line::Text("-item"));
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(classify(""), Line::Blank);
    }

    #[test]
    fn test_tagged_lines() {
        assert_eq!(classify("<h2>Raw</h2>"), Line::Tagged("<h2>Raw</h2>"));
        assert_eq!(classify("<li>x</li>"), Line::Tagged("<li>x</li>"));
        assert_eq!(classify("<p>para</p>"), Line::Tagged("<p>para</p>"));
        assert_eq!(classify("<div>box</div>"), Line::Text("<div>box</div>"));
        assert_eq!(classify(" <p>indented</p>"), Line::Text(" <p>indented</p>"));
    }
}
