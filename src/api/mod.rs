//! Site WASM API
//!
//! The JavaScript-facing surface of the module.
//!
//! - `helpers`: serialization across the JS boundary
//! - `navigation`: scroll-spy, smooth scrolling and menu listeners
//! - `content`: markdown document loading with static fallback

pub mod content;
pub mod helpers;
pub mod navigation;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::content::FALLBACK_HTML;
use crate::dom;
use crate::models::{Section, SiteConfig};
use crate::tracker::compute_active;

pub use navigation::NavigationController;

/// Wire up navigation and start loading content.
///
/// Call once the DOM is ready. `config` is an optional partial
/// [`SiteConfig`]; omitted fields keep their defaults.
#[wasm_bindgen(js_name = initSite)]
pub fn init_site(config: JsValue) -> Result<(), JsValue> {
    let config: SiteConfig = helpers::deserialize_or_default(config, "Invalid site config")?;
    let window = dom::window()?;

    let controller = NavigationController::new(window.clone(), config.clone())?;
    let controller = Rc::new(RefCell::new(controller));
    navigation::bind_events(&controller)?;
    controller.borrow_mut().refresh();

    wasm_bindgen_futures::spawn_local(async move {
        content::load_content(window, config).await;
    });

    dom::create_icons();

    log::info!("🤖 AI in Guerra - Sito Minimal Caricato!");
    Ok(())
}

/// Render markdown to an HTML fragment
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(markdown: &str) -> String {
    crate::markdown::render(markdown)
}

/// Active section id for `scroll_y`, using the default detection offset.
///
/// `sections` is an array of `{ id, top, height }`.
#[wasm_bindgen(js_name = computeActiveSection)]
pub fn compute_active_section(scroll_y: f64, sections: JsValue) -> Result<Option<String>, JsValue> {
    let sections: Vec<Section> = helpers::deserialize(sections, "Invalid sections")?;
    let offset = SiteConfig::default().detection_offset;
    Ok(compute_active(scroll_y, offset, &sections).map(str::to_string))
}

/// The static HTML inserted when content loading fails
#[wasm_bindgen(js_name = fallbackContent)]
pub fn fallback_content() -> String {
    FALLBACK_HTML.to_string()
}
