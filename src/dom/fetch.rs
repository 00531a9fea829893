//! Document fetch and the content container

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response, Window};

use crate::content::{ContentError, ContentSink};

/// Fetch `path` relative to the page and read the body as text.
///
/// One attempt, no timeout. Non-success statuses are errors.
pub async fn fetch_text(window: &Window, path: &str) -> Result<String, ContentError> {
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| ContentError::Network(format!("{:?}", e)))?;

    let response: Response = response
        .dyn_into()
        .map_err(|e| ContentError::Network(format!("not a Response: {:?}", e)))?;

    if !response.ok() {
        return Err(ContentError::Status(response.status()));
    }

    let body = response
        .text()
        .map_err(|e| ContentError::Body(format!("{:?}", e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ContentError::Body(format!("{:?}", e)))?;

    body.as_string()
        .ok_or_else(|| ContentError::Body("body is not a string".to_string()))
}

/// The element that receives loaded content, if the page has one
pub struct ContainerSink {
    container: Option<Element>,
}

impl ContainerSink {
    pub fn new(container: Option<Element>) -> Self {
        Self { container }
    }
}

impl ContentSink for ContainerSink {
    fn set_html(&mut self, html: &str) -> bool {
        match &self.container {
            Some(container) => {
                container.set_inner_html(html);
                true
            }
            None => false,
        }
    }
}
