//! Data models for the site module
//!
//! Plain values shared between the pure decision modules and the DOM
//! layer.

pub mod config;
pub mod nav_state;
pub mod section;

pub use config::{ScrollMode, SiteConfig, DEFAULT_DETECTION_OFFSET, DEFAULT_NAV_OFFSET};
pub use nav_state::{NavEvent, NavState, INITIAL_SECTION};
pub use section::Section;
