//! Search pages tool implementation.

use log::error;
use notion_core::client::NotionApi;
use notion_core::{normalize, payload};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Value, json};

use crate::envelope;

/// Parameters for the search_pages tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchPagesParams {
    /// Search query matched against page titles and content.
    pub query: String,

    /// Maximum number of results to return. Default: 10.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

/// Execute the search_pages tool.
///
/// Searches the workspace for pages and returns their normalized
/// `{id, title, url, last_edited}` summaries, never more than `page_size`.
pub async fn execute(notion: &impl NotionApi, params: &SearchPagesParams) -> CallToolResult {
    let response = match notion
        .search(
            Some(&params.query),
            Some(payload::page_filter()),
            None,
            params.page_size,
        )
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Error searching pages: {}", e);
            return envelope::from_error(&e);
        }
    };

    let results: Vec<Value> = response
        .get("results")
        .and_then(Value::as_array)
        .map(|pages| {
            pages
                .iter()
                .take(params.page_size as usize)
                .map(normalize::page_summary)
                .collect()
        })
        .unwrap_or_default();

    envelope::success(json!({
        "count": results.len(),
        "results": results,
    }))
}
