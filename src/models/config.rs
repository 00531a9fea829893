//! Site configuration
//!
//! Selectors, offsets and content locations used by the navigation and
//! content loader. JavaScript may pass a partial object to `initSite`;
//! every missing field falls back to the defaults below, which match the
//! markup of the site this module ships with.

use serde::Deserialize;

/// Pixels added to the scroll offset before looking for the active section
pub const DEFAULT_DETECTION_OFFSET: f64 = 100.0;

/// Height of the fixed navbar subtracted from anchor scroll targets
pub const DEFAULT_NAV_OFFSET: f64 = 80.0;

/// How an in-page anchor click scrolls to its target
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScrollMode {
    /// `window.scrollTo` the target's top minus the navbar offset
    #[default]
    Offset,
    /// `element.scrollIntoView` aligned to the block start
    IntoView,
}

/// Configuration for navigation and content loading
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub detection_offset: f64,
    pub nav_offset: f64,

    /// Elements tracked by the scroll-spy
    pub section_selector: String,

    /// Navigation entries that carry the active marker
    pub nav_link_selector: String,

    /// In-page anchors that get smooth scrolling
    pub anchor_selector: String,

    pub hamburger_id: String,
    pub nav_menu_selector: String,

    /// Class toggled for the active link and the open menu
    pub active_class: String,

    /// Relative URL of the markdown document to load
    pub content_path: String,

    /// Id of the element that receives the rendered content
    pub container_id: String,

    pub scroll_mode: ScrollMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            detection_offset: DEFAULT_DETECTION_OFFSET,
            nav_offset: DEFAULT_NAV_OFFSET,
            section_selector: ".content-section, .hero".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            hamburger_id: "hamburger".to_string(),
            nav_menu_selector: ".nav-menu".to_string(),
            active_class: "active".to_string(),
            content_path: "hardware-software-testing.md".to_string(),
            container_id: "hardware-content".to_string(),
            scroll_mode: ScrollMode::Offset,
        }
    }
}
