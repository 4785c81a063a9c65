//! Create page tool implementation.

use log::{error, warn};
use notion_core::client::NotionApi;
use notion_core::payload;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Value, json};

use crate::envelope;

/// Parameters for the create_page tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreatePageParams {
    /// Title of the new page.
    pub title: String,

    /// Text content for the page body.
    pub content: String,

    /// Optional ID of the parent page. When omitted, the first page found
    /// by search is used as the parent.
    pub parent_page_id: Option<String>,
}

/// Execute the create_page tool.
///
/// Creates a page with one paragraph block of content. The API requires a
/// parent, so when none is given the first page search returns stands in;
/// with no parent and no searchable page the tool fails without attempting
/// creation.
pub async fn execute(notion: &impl NotionApi, params: &CreatePageParams) -> CallToolResult {
    let properties = payload::title_properties(&params.title);
    let children = vec![payload::paragraph_block(&params.content)];

    let parent = match &params.parent_page_id {
        Some(page_id) => payload::page_parent(page_id),
        None => {
            warn!("No parent_page_id provided, searching for a page to use as parent");
            let found = match notion
                .search(None, Some(payload::page_filter()), None, 1)
                .await
            {
                Ok(response) => first_result_id(&response),
                Err(e) => {
                    error!("Parent search failed: {}", e);
                    return envelope::from_error(&e);
                }
            };
            match found {
                Some(page_id) => payload::page_parent(&page_id),
                None => {
                    return envelope::failure(
                        "No parent page specified and no existing pages found. \
                         Please provide a parent_page_id.",
                    );
                }
            }
        }
    };

    match notion.create_page(parent, properties, Some(children)).await {
        Ok(page) => envelope::success(json!({
            "page_id": page.get("id").cloned().unwrap_or(Value::Null),
            "url": page.get("url").cloned().unwrap_or(Value::Null),
            "message": format!("Page '{}' created successfully", params.title),
        })),
        Err(e) => {
            error!("Error creating page: {}", e);
            envelope::from_error(&e)
        }
    }
}

fn first_result_id(response: &Value) -> Option<String> {
    response
        .get("results")?
        .as_array()?
        .first()?
        .get("id")?
        .as_str()
        .map(str::to_string)
}
