//! Section geometry
//!
//! A section is a content region of the page as seen by the scroll-spy:
//! its identifier plus the vertical extent it occupied when layout was
//! last measured. Sections are plain input; nothing here owns or mutates
//! the page layout.

use serde::Deserialize;

/// A content section measured from the page layout
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    /// Element id, matched against nav link hrefs (`#id`)
    pub id: String,

    /// Offset of the section's top edge from the document top (pixels)
    pub top: f64,

    /// Rendered height of the section (pixels)
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Bottom edge of the section
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `point` lies inside `[top, top + height]`, both ends inclusive.
    ///
    /// A negative height yields an empty range, so such a section never
    /// contains anything.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.top && point <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_at_both_edges() {
        let section = Section::new("intro", 0.0, 500.0);
        assert!(section.contains(0.0));
        assert!(section.contains(500.0));
        assert!(!section.contains(500.5));
        assert!(!section.contains(-1.0));
    }

    #[test]
    fn test_negative_height_never_contains() {
        let section = Section::new("broken", 200.0, -50.0);
        assert!(!section.contains(175.0));
        assert!(!section.contains(200.0));
        assert!(!section.contains(150.0));
    }

    #[test]
    fn test_deserializes_from_js_shape() {
        let section: Section =
            serde_json::from_str(r#"{"id":"about","top":640.5,"height":320}"#).unwrap();
        assert_eq!(section, Section::new("about", 640.5, 320.0));
    }
}
