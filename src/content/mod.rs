//! Content loading
//!
//! The page's long-form section is authored in markdown and fetched at
//! boot. A successful fetch is rendered to HTML; any failure inserts the
//! pre-authored fallback block instead, untouched by the renderer. The
//! fetch itself lives in [`crate::dom`]; this module owns the decision.

use thiserror::Error;

use crate::markdown::Renderer;

/// Pre-authored HTML inserted when the markdown document cannot be loaded
pub const FALLBACK_HTML: &str = include_str!("fallback.html");

/// Why the markdown document could not be loaded
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// `fetch()` rejected (offline, CORS, bad URL)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be read as text
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Where the resulting HTML goes
pub trait ContentSink {
    /// Replace the sink's content. Returns `false` if there was nowhere to put it.
    fn set_html(&mut self, html: &str) -> bool;
}

/// Which path produced the inserted HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Rendered,
    Fallback,
}

/// HTML for a fetch outcome: the rendered document, or the fallback
/// block verbatim. `renderer` is only called on success.
pub fn resolve_content<R: Renderer + ?Sized>(
    fetched: Result<String, ContentError>,
    renderer: &R,
) -> (String, ContentSource) {
    match fetched {
        Ok(markdown) => (renderer.render(&markdown), ContentSource::Rendered),
        Err(e) => {
            log::warn!("Loading static content fallback ({})", e);
            (FALLBACK_HTML.to_string(), ContentSource::Fallback)
        }
    }
}

/// Resolve a fetch outcome and insert the result into `sink`.
///
/// Returns the source used, or `None` when the sink had no target.
pub fn load_into<R, S>(
    fetched: Result<String, ContentError>,
    renderer: &R,
    sink: &mut S,
) -> Option<ContentSource>
where
    R: Renderer + ?Sized,
    S: ContentSink + ?Sized,
{
    let (html, source) = resolve_content(fetched, renderer);
    if sink.set_html(&html) {
        log::debug!("Inserted {:?} content ({} bytes)", source, html.len());
        Some(source)
    } else {
        log::debug!("Content container not found, skipping insert");
        None
    }
}
