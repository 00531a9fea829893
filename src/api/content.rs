//! Content loader wiring

use web_sys::Window;

use crate::content::{load_into, ContentSource};
use crate::dom::{self, fetch_text, ContainerSink};
use crate::markdown::MarkdownRenderer;
use crate::models::SiteConfig;

/// Fetch the configured markdown document and fill the content container.
///
/// Falls back to the static block on any fetch failure. Resolves to the
/// source that was inserted, or `None` if the page has no container.
pub async fn load_content(window: Window, config: SiteConfig) -> Option<ContentSource> {
    let fetched = fetch_text(&window, &config.content_path).await;

    let container = dom::document(&window)
        .ok()
        .and_then(|doc| doc.get_element_by_id(&config.container_id));
    let mut sink = ContainerSink::new(container);

    load_into(fetched, &MarkdownRenderer, &mut sink)
}
