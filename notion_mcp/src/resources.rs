//! Resource handling for the Notion MCP server.
//!
//! Resources expose read-only workspace views to MCP clients:
//! - `notion://recent-pages` - markdown listing of recently edited pages

use std::fmt::Write;

use log::error;
use notion_core::client::NotionApi;
use notion_core::{normalize, payload};
use rmcp::model::{AnnotateAble, RawResource, Resource};
use serde_json::Value;

/// URI of the recent-pages resource.
pub const RECENT_PAGES_URI: &str = "notion://recent-pages";

/// Number of pages the recent-pages listing fetches.
const RECENT_PAGES_LIMIT: u32 = 20;

/// Creates the resource descriptor for the recent-pages listing.
pub fn recent_pages_resource() -> Resource {
    RawResource {
        uri: RECENT_PAGES_URI.to_string(),
        name: "Recently Edited Pages".to_string(),
        title: None,
        description: Some("The most recently edited pages in the Notion workspace.".to_string()),
        mime_type: Some("text/markdown".to_string()),
        size: None,
        icons: None,
        meta: None,
    }
    .no_annotation()
}

/// Fetch and render the recent-pages listing.
///
/// Failures render as an inline error string rather than a protocol error,
/// so readers always receive text.
pub async fn recent_pages(notion: &impl NotionApi) -> String {
    match notion
        .search(
            None,
            Some(payload::page_filter()),
            Some(payload::recent_first_sort()),
            RECENT_PAGES_LIMIT,
        )
        .await
    {
        Ok(response) => render_recent_pages(&response),
        Err(e) => {
            error!("Error getting recent pages: {}", e);
            format!("Error retrieving recent pages: {}", e)
        }
    }
}

/// Render a search response as the recent-pages markdown listing.
pub fn render_recent_pages(response: &Value) -> String {
    let mut output = String::from("# Recently Edited Pages\n");

    if let Some(pages) = response.get("results").and_then(Value::as_array) {
        for page in pages {
            let title = normalize::extract_title(page);
            let id = page.get("id").and_then(Value::as_str).unwrap_or_default();
            let url = page.get("url").and_then(Value::as_str).unwrap_or_default();
            let last_edited = page
                .get("last_edited_time")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");

            write!(
                output,
                "\n- **{}**\n  - ID: `{}`\n  - URL: {}\n  - Last edited: {}\n",
                title, id, url, last_edited
            )
            .unwrap();
        }
    }

    output
}
