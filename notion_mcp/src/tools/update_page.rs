//! Update page tool implementation.

use log::error;
use notion_core::client::NotionApi;
use notion_core::payload;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Value, json};

use crate::envelope;

/// Parameters for the update_page tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdatePageParams {
    /// ID of the page to update.
    pub page_id: String,

    /// New title for the page.
    pub title: Option<String>,

    /// Archive (true) or restore (false) the page.
    pub archived: Option<bool>,
}

/// Execute the update_page tool.
///
/// Builds a partial update containing only the supplied fields. Calling it
/// with neither field is an ordinary failure, reported before any request
/// is made.
pub async fn execute(notion: &impl NotionApi, params: &UpdatePageParams) -> CallToolResult {
    if params.title.is_none() && params.archived.is_none() {
        return envelope::failure("No update parameters provided");
    }

    let properties = params.title.as_deref().map(payload::title_properties);

    match notion
        .update_page(&params.page_id, properties, params.archived)
        .await
    {
        Ok(page) => envelope::success(json!({
            "page_id": page.get("id").cloned().unwrap_or(Value::Null),
            "url": page.get("url").cloned().unwrap_or(Value::Null),
            "message": "Page updated successfully",
        })),
        Err(e) => {
            error!("Error updating page: {}", e);
            envelope::from_error(&e)
        }
    }
}
