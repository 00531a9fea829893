//! Error types for the browser-facing layer

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the module to the page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("no global `window` available")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    /// A DOM call threw (bad selector, detached node, ...)
    #[error("DOM error: {0}")]
    Dom(String),
}

impl SiteError {
    /// Wrap a thrown JS value with some context
    pub fn dom(context: &str, err: JsValue) -> Self {
        SiteError::Dom(format!("{}: {:?}", context, err))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
