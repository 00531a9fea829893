//! Navigation links as an [`ActiveMarker`]

use web_sys::Element;

use crate::tracker::ActiveMarker;

/// The page's nav links plus the class used as the active marker
pub struct NavLinks {
    links: Vec<Element>,
    active_class: String,
}

impl NavLinks {
    pub fn new(links: Vec<Element>, active_class: impl Into<String>) -> Self {
        Self {
            links,
            active_class: active_class.into(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.links
    }
}

impl ActiveMarker for NavLinks {
    fn len(&self) -> usize {
        self.links.len()
    }

    fn href(&self, index: usize) -> Option<String> {
        self.links.get(index)?.get_attribute("href")
    }

    fn set_active(&mut self, index: usize, active: bool) {
        let Some(link) = self.links.get(index) else {
            return;
        };
        if let Err(e) = super::set_class(link, &self.active_class, active) {
            log::warn!("Failed to update nav link {}: {}", index, e);
        }
    }
}
