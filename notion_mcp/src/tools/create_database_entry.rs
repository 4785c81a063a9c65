//! Create database entry tool implementation.

use log::error;
use notion_core::client::NotionApi;
use notion_core::payload;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Value, json};

use crate::envelope;

/// Parameters for the create_database_entry tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateDatabaseEntryParams {
    /// ID of the database receiving the entry.
    pub database_id: String,

    /// Property map matching the database schema, e.g.
    /// `{"Name": {"title": [{"text": {"content": "Task"}}]}}`.
    /// Passed through to Notion unmodified; the API validates it against
    /// the schema.
    pub properties: Value,
}

/// Execute the create_database_entry tool.
pub async fn execute(
    notion: &impl NotionApi,
    params: &CreateDatabaseEntryParams,
) -> CallToolResult {
    let parent = payload::database_parent(&params.database_id);

    match notion
        .create_page(parent, params.properties.clone(), None)
        .await
    {
        Ok(page) => envelope::success(json!({
            "page_id": page.get("id").cloned().unwrap_or(Value::Null),
            "url": page.get("url").cloned().unwrap_or(Value::Null),
            "message": "Database entry created successfully",
        })),
        Err(e) => {
            error!("Error creating database entry: {}", e);
            envelope::from_error(&e)
        }
    }
}
