//! Site WASM Module
//!
//! Front-end logic for a single-page site: scroll-spy navigation,
//! smooth anchor scrolling, the mobile menu and a markdown content
//! loader with a static fallback.
//!
//! The decision logic (`tracker`, `markdown`, `content`, `models`) is
//! pure and DOM-free; `dom` and `api` connect it to the browser.

pub mod api;
pub mod content;
pub mod dom;
pub mod error;
pub mod markdown;
pub mod models;
pub mod tracker;

// Re-export commonly used types
pub use content::{ContentError, ContentSource, FALLBACK_HTML};
pub use error::SiteError;
pub use markdown::{render, MarkdownRenderer, Renderer};
pub use models::{NavEvent, NavState, Section, SiteConfig};
pub use tracker::{activate_link, compute_active, ActiveMarker};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Site WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
