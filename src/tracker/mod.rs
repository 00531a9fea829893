//! Scroll-spy section tracking
//!
//! Pure decision logic for navigation highlighting: which section is
//! active for a scroll offset, which nav entry should carry the active
//! marker, and where an anchor click should scroll to. Applying the
//! result to the page goes through [`ActiveMarker`], so none of this
//! needs a DOM.

use crate::models::Section;

/// Find the active section for a scroll offset.
///
/// The detection point is `scroll_y + detection_offset`. Every section is
/// tested in list order and iteration never stops early: when ranges
/// overlap, the last matching section wins. Returns `None` when the point
/// falls outside every section.
pub fn compute_active(scroll_y: f64, detection_offset: f64, sections: &[Section]) -> Option<&str> {
    let point = scroll_y + detection_offset;

    let mut active = None;
    for section in sections {
        if section.contains(point) {
            active = Some(section.id.as_str());
        }
    }
    active
}

/// Navigation entries that can carry a single "active" marker
pub trait ActiveMarker {
    /// Number of navigation entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The href of entry `index`, if it has one
    fn href(&self, index: usize) -> Option<String>;

    /// Set or clear the marker on entry `index`
    fn set_active(&mut self, index: usize, active: bool);
}

/// Whether a nav href points at the section `id`.
///
/// An id-less section matches a bare `#` link.
pub fn links_to(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Mark the entry linking to `id` and clear every other entry.
///
/// Returns how many entries ended up marked (0 when no link targets `id`).
pub fn activate_link<M: ActiveMarker + ?Sized>(marker: &mut M, id: &str) -> usize {
    let mut marked = 0;
    for index in 0..marker.len() {
        let active = marker
            .href(index)
            .map(|href| links_to(&href, id))
            .unwrap_or(false);
        marker.set_active(index, active);
        if active {
            marked += 1;
        }
    }
    marked
}

/// Element id referenced by an in-page anchor href (`#id` -> `id`)
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position that brings an element at `offset_top` just
/// below the fixed navbar
pub fn scroll_target(offset_top: f64, nav_offset: f64) -> f64 {
    offset_top - nav_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Links {
        hrefs: Vec<Option<String>>,
        active: Vec<bool>,
    }

    impl Links {
        fn new(hrefs: &[&str]) -> Self {
            Self {
                hrefs: hrefs.iter().map(|h| Some(h.to_string())).collect(),
                active: vec![false; hrefs.len()],
            }
        }
    }

    impl ActiveMarker for Links {
        fn len(&self) -> usize {
            self.hrefs.len()
        }

        fn href(&self, index: usize) -> Option<String> {
            self.hrefs[index].clone()
        }

        fn set_active(&mut self, index: usize, active: bool) {
            self.active[index] = active;
        }
    }

    fn tiled() -> Vec<Section> {
        vec![
            Section::new("intro", 0.0, 600.0),
            Section::new("history", 600.0, 800.0),
            Section::new("hardware", 1400.0, 1000.0),
        ]
    }

    #[test]
    fn test_detection_offset_is_applied() {
        let sections = tiled();
        // 550 + 100 lands in history, not intro
        assert_eq!(compute_active(550.0, 100.0, &sections), Some("history"));
        assert_eq!(compute_active(450.0, 100.0, &sections), Some("intro"));
    }

    #[test]
    fn test_shared_edge_goes_to_later_section() {
        let sections = tiled();
        // point 600 is the bottom of intro and the top of history
        assert_eq!(compute_active(500.0, 100.0, &sections), Some("history"));
    }

    #[test]
    fn test_activate_link_marks_exactly_one() {
        let mut links = Links::new(&["#intro", "#history", "#hardware"]);
        links.active = vec![true, false, true];

        assert_eq!(activate_link(&mut links, "history"), 1);
        assert_eq!(links.active, vec![false, true, false]);
    }

    #[test]
    fn test_activate_link_is_idempotent() {
        let mut links = Links::new(&["#intro", "#history"]);
        activate_link(&mut links, "intro");
        let first = links.active.clone();
        activate_link(&mut links, "intro");
        assert_eq!(links.active, first);
    }

    #[test]
    fn test_activate_link_unknown_id_clears_all() {
        let mut links = Links::new(&["#intro", "#history"]);
        links.active = vec![true, true];
        links.hrefs.push(None);
        links.active.push(true);

        assert_eq!(activate_link(&mut links, "missing"), 0);
        assert!(links.active.iter().all(|a| !a));
    }

    #[test]
    fn test_links_to_compares_whole_fragment() {
        assert!(links_to("#hardware", "hardware"));
        assert!(!links_to("#hardware-2", "hardware"));
        assert!(!links_to("hardware", "hardware"));
        assert!(links_to("#", ""));
        assert!(!links_to("", ""));
    }

    #[test]
    fn test_idless_section_marks_bare_hash_link() {
        let mut links = Links::new(&["#", "#intro"]);
        assert_eq!(activate_link(&mut links, ""), 1);
        assert_eq!(links.active, vec![true, false]);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#hardware"), Some("hardware"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_scroll_target_subtracts_navbar() {
        assert_eq!(scroll_target(1400.0, 80.0), 1320.0);
        assert_eq!(scroll_target(40.0, 80.0), -40.0);
    }
}
