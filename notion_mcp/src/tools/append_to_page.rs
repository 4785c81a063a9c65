//! Append to page tool implementation.

use log::error;
use notion_core::client::NotionApi;
use notion_core::payload;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use crate::envelope;

/// Parameters for the append_to_page tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AppendToPageParams {
    /// ID of the page to append to.
    pub page_id: String,

    /// Text content to append.
    pub content: String,
}

/// Execute the append_to_page tool.
///
/// Appends exactly one paragraph block to the page.
pub async fn execute(notion: &impl NotionApi, params: &AppendToPageParams) -> CallToolResult {
    let children = vec![payload::paragraph_block(&params.content)];

    match notion.append_block_children(&params.page_id, children).await {
        Ok(_) => envelope::success(json!({
            "message": format!("Content appended to page {}", params.page_id),
        })),
        Err(e) => {
            error!("Error appending to page: {}", e);
            envelope::from_error(&e)
        }
    }
}
