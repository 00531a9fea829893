//! Navigation state
//!
//! The page's navigation UI state as an explicit value. Browser events are
//! turned into [`NavEvent`]s by the DOM layer and folded into the next
//! state here; the DOM layer then applies whatever changed.

use crate::models::Section;
use crate::tracker::compute_active;

/// Section assumed active before the first scroll-spy pass
pub const INITIAL_SECTION: &str = "intro";

/// Navigation UI events, as delivered by the host page
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// The window scrolled to `scroll_y`
    Scrolled { scroll_y: f64 },

    /// The hamburger toggle was clicked
    HamburgerClicked,

    /// A navigation link was clicked
    NavLinkClicked,
}

/// Current navigation UI state
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    /// Section whose nav link carries the active marker
    pub active_section: Option<String>,

    /// Whether the mobile menu is expanded
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_section: Some(INITIAL_SECTION.to_string()),
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the next state.
    ///
    /// A scroll that lands outside every section keeps the previous active
    /// section.
    pub fn next(&self, event: &NavEvent, sections: &[Section], detection_offset: f64) -> NavState {
        match event {
            NavEvent::Scrolled { scroll_y } => {
                self.scrolled(compute_active(*scroll_y, detection_offset, sections))
            }
            NavEvent::HamburgerClicked => self.with_menu(!self.menu_open),
            NavEvent::NavLinkClicked => self.with_menu(false),
        }
    }

    fn with_menu(&self, open: bool) -> NavState {
        NavState {
            menu_open: open,
            ..self.clone()
        }
    }

    /// State after a scroll whose detection point matched `active`.
    ///
    /// `None` keeps the previous active section.
    pub fn scrolled(&self, active: Option<&str>) -> NavState {
        let mut next = self.clone();
        if let Some(id) = active {
            next.active_section = Some(id.to_string());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("intro", 0.0, 500.0),
            Section::new("hardware", 500.0, 500.0),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert_eq!(state.active_section.as_deref(), Some("intro"));
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_moves_active_section() {
        let state = NavState::new();
        let next = state.next(&NavEvent::Scrolled { scroll_y: 450.0 }, &sections(), 100.0);
        assert_eq!(next.active_section.as_deref(), Some("hardware"));
        assert_eq!(next, state.scrolled(Some("hardware")));
    }

    #[test]
    fn test_scroll_past_all_sections_keeps_previous() {
        let state = NavState {
            active_section: Some("hardware".to_string()),
            menu_open: false,
        };
        let next = state.next(&NavEvent::Scrolled { scroll_y: 5000.0 }, &sections(), 100.0);
        assert_eq!(next, state);
        assert_eq!(state.scrolled(None), state);
    }

    #[test]
    fn test_hamburger_toggles_and_link_closes() {
        let state = NavState::new();
        let opened = state.next(&NavEvent::HamburgerClicked, &[], 100.0);
        assert!(opened.menu_open);

        let closed = opened.next(&NavEvent::HamburgerClicked, &[], 100.0);
        assert!(!closed.menu_open);

        let reopened = closed.next(&NavEvent::HamburgerClicked, &[], 100.0);
        let after_link = reopened.next(&NavEvent::NavLinkClicked, &[], 100.0);
        assert!(!after_link.menu_open);

        // closing an already closed menu is a no-op
        assert_eq!(after_link.next(&NavEvent::NavLinkClicked, &[], 100.0), after_link);
    }

    #[test]
    fn test_menu_events_leave_active_section_alone() {
        let state = NavState::new();
        let next = state.next(&NavEvent::HamburgerClicked, &sections(), 100.0);
        assert_eq!(next.active_section, state.active_section);
    }
}
