//! Navigation wiring
//!
//! Owns the page's [`NavState`] and turns browser events into state
//! transitions. Each listener builds a [`NavEvent`], hands it to
//! [`NavigationController::dispatch`] and the controller applies the
//! difference to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::dom::{self, NavLinks};
use crate::error::{Result, SiteError};
use crate::models::{NavEvent, NavState, Section, SiteConfig};
use crate::tracker::{activate_link, anchor_target, compute_active};

/// Scroll-spy, smooth scrolling and the mobile menu for one page
pub struct NavigationController {
    config: SiteConfig,
    window: Window,
    document: Document,
    sections: Vec<Element>,
    links: NavLinks,
    hamburger: Option<Element>,
    menu: Option<Element>,
    state: NavState,
}

impl NavigationController {
    /// Capture the page elements named by `config`
    pub fn new(window: Window, config: SiteConfig) -> Result<Self> {
        let document = dom::document(&window)?;
        let sections = dom::query_all(&document, &config.section_selector)?;
        let links = NavLinks::new(
            dom::query_all(&document, &config.nav_link_selector)?,
            config.active_class.clone(),
        );
        let hamburger = document.get_element_by_id(&config.hamburger_id);
        let menu = dom::query_one(&document, &config.nav_menu_selector)?;

        log::debug!(
            "Navigation: {} sections, {} nav links, menu toggle {}",
            sections.len(),
            links.elements().len(),
            if hamburger.is_some() && menu.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            config,
            window,
            document,
            sections,
            links,
            hamburger,
            menu,
            state: NavState::new(),
        })
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Section geometry as laid out right now
    pub fn measure_sections(&self) -> Vec<Section> {
        dom::measure_all(&self.sections)
    }

    /// Fold `event` into the state and apply whatever changed
    pub fn dispatch(&mut self, event: &NavEvent) {
        let next = match event {
            NavEvent::Scrolled { scroll_y } => {
                let sections = self.measure_sections();
                let active = compute_active(*scroll_y, self.config.detection_offset, &sections);
                // Re-applied on every matching scroll, not only on change
                if let Some(id) = active {
                    activate_link(&mut self.links, id);
                }
                self.state.scrolled(active)
            }
            _ => self.state.next(event, &[], self.config.detection_offset),
        };

        if next.menu_open != self.state.menu_open {
            self.apply_menu(next.menu_open);
        }

        self.state = next;
    }

    /// Scroll-spy pass for the current window position
    pub fn refresh(&mut self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        self.dispatch(&NavEvent::Scrolled { scroll_y });
    }

    fn apply_menu(&self, open: bool) {
        for element in [&self.menu, &self.hamburger].into_iter().flatten() {
            if let Err(e) = dom::set_class(element, &self.config.active_class, open) {
                log::warn!("Failed to toggle menu: {}", e);
            }
        }
    }

    /// Smooth-scroll to the element referenced by `href`
    fn scroll_to_anchor(&self, href: &str) {
        let Some(id) = anchor_target(href) else {
            return;
        };
        match self.document.get_element_by_id(id) {
            Some(target) => dom::scroll_to_element(&self.window, &target, &self.config),
            None => log::debug!("Anchor target #{} not found", id),
        }
    }
}

/// Attach every navigation listener. Listeners live as long as the page.
pub fn bind_events(controller: &Rc<RefCell<NavigationController>>) -> Result<()> {
    let (window, document, config) = {
        let c = controller.borrow();
        (c.window.clone(), c.document.clone(), c.config.clone())
    };

    for anchor in dom::query_all(&document, &config.anchor_selector)? {
        let ctrl = Rc::clone(controller);
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            ctrl.borrow().scroll_to_anchor(&href);
        })?;
    }

    {
        let ctrl = Rc::clone(controller);
        listen(&window, "scroll", move |_event: Event| {
            ctrl.borrow_mut().refresh();
        })?;
    }

    let (hamburger, has_menu, links) = {
        let c = controller.borrow();
        (c.hamburger.clone(), c.menu.is_some(), c.links.elements().to_vec())
    };

    if let (Some(hamburger), true) = (hamburger, has_menu) {
        let ctrl = Rc::clone(controller);
        listen(&hamburger, "click", move |event: Event| {
            event.prevent_default();
            ctrl.borrow_mut().dispatch(&NavEvent::HamburgerClicked);
        })?;

        for link in links {
            let ctrl = Rc::clone(controller);
            listen(&link, "click", move |_event: Event| {
                ctrl.borrow_mut().dispatch(&NavEvent::NavLinkClicked);
            })?;
        }
    }

    Ok(())
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| SiteError::dom(event, e))?;
    closure.forget();
    Ok(())
}
