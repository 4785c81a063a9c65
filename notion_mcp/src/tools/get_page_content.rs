//! Get page content tool implementation.

use log::error;
use notion_core::client::NotionApi;
use notion_core::normalize;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Value, json};

use crate::envelope;

/// Parameters for the get_page_content tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetPageContentParams {
    /// ID of the page to read.
    pub page_id: String,
}

/// Execute the get_page_content tool.
///
/// Fetches the page's metadata, then its direct child blocks. Blocks with
/// no extractable text are omitted from the content sequence. The block
/// fetch is skipped entirely when the metadata fetch fails.
pub async fn execute(notion: &impl NotionApi, params: &GetPageContentParams) -> CallToolResult {
    let page = match notion.retrieve_page(&params.page_id).await {
        Ok(page) => page,
        Err(e) => {
            error!("Error retrieving page: {}", e);
            return envelope::from_error(&e);
        }
    };
    let title = normalize::extract_title(&page);

    let blocks = match notion.list_block_children(&params.page_id).await {
        Ok(blocks) => blocks,
        Err(e) => {
            error!("Error retrieving page blocks: {}", e);
            return envelope::from_error(&e);
        }
    };

    let content: Vec<Value> = blocks
        .get("results")
        .and_then(Value::as_array)
        .map(|blocks| {
            blocks
                .iter()
                .filter_map(|block| {
                    let text = normalize::extract_block_text(block)?;
                    Some(json!({
                        "type": block.get("type").cloned().unwrap_or(Value::Null),
                        "text": text,
                    }))
                })
                .collect()
        })
        .unwrap_or_default();

    envelope::success(json!({
        "page_id": params.page_id,
        "title": title,
        "url": page.get("url").cloned().unwrap_or(Value::Null),
        "content": content,
        "last_edited": page.get("last_edited_time").cloned().unwrap_or(Value::Null),
    }))
}
