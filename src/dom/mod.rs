//! DOM access
//!
//! Thin wrappers over `web-sys` used by the API layer: element lookup,
//! geometry capture, class toggling and scrolling. Everything that
//! decides *what* to do lives in the pure modules; this module only
//! reads from and writes to the page.

pub mod fetch;
pub mod links;

pub use fetch::{fetch_text, ContainerSink};
pub use links::NavLinks;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::error::{Result, SiteError};
use crate::models::{ScrollMode, Section, SiteConfig};
use crate::tracker::scroll_target;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::MissingWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(SiteError::MissingDocument)
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| SiteError::dom(selector, e))?;

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| SiteError::dom(selector, e))
}

/// Measure an element's current extent as a [`Section`]
pub fn measure(element: &Element) -> Section {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => Section::new(
            html.id(),
            f64::from(html.offset_top()),
            f64::from(html.offset_height()),
        ),
        // Non-HTML elements (SVG) have no offset geometry
        None => Section::new(element.id(), 0.0, -1.0),
    }
}

pub fn measure_all(elements: &[Element]) -> Vec<Section> {
    elements.iter().map(measure).collect()
}

/// Add or remove `class` on `element`
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.map_err(|e| SiteError::dom(class, e))
}

/// Smoothly scroll the window so that `target` comes into view
pub fn scroll_to_element(window: &Window, target: &Element, config: &SiteConfig) {
    match config.scroll_mode {
        ScrollMode::Offset => {
            let top = target
                .dyn_ref::<HtmlElement>()
                .map(|el| f64::from(el.offset_top()))
                .unwrap_or(0.0);

            let options = ScrollToOptions::new();
            options.set_top(scroll_target(top, config.nav_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        ScrollMode::IntoView => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Call `lucide.createIcons()` if the icon library is on the page
pub fn create_icons() {
    let global = js_sys::global();
    let Ok(lucide) = js_sys::Reflect::get(&global, &"lucide".into()) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }

    let create = js_sys::Reflect::get(&lucide, &"createIcons".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    match create {
        Some(create) => {
            if let Err(e) = create.call0(&lucide) {
                log::warn!("lucide.createIcons failed: {:?}", e);
            }
        }
        None => log::debug!("lucide present without createIcons"),
    }
}
