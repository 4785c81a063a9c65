//! Uniform result envelopes for tool output.
//!
//! Every tool returns exactly one envelope: `{"success": true, ...}` with
//! operation-specific fields, or `{"success": false, "error": ...}`. The
//! envelope is serialized into the tool result's text content, and failures
//! are additionally flagged through `CallToolResult::error`.

use notion_core::NotionError;
use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};

/// A successful envelope carrying the given fields.
pub fn success(fields: Value) -> CallToolResult {
    let mut envelope = json!({ "success": true });
    if let (Some(envelope), Some(fields)) = (envelope.as_object_mut(), fields.as_object()) {
        for (key, value) in fields {
            envelope.insert(key.clone(), value.clone());
        }
    }
    CallToolResult::success(vec![Content::text(render(&envelope))])
}

/// A failed envelope carrying an error message.
pub fn failure(message: impl Into<String>) -> CallToolResult {
    let envelope = json!({ "success": false, "error": message.into() });
    CallToolResult::error(vec![Content::text(render(&envelope))])
}

/// A failed envelope for a client error.
///
/// Errors the API itself reported keep the `Notion API error:` prefix so
/// they stay distinguishable from transport and local faults, which are
/// rendered bare.
pub fn from_error(error: &NotionError) -> CallToolResult {
    match error {
        NotionError::Api { .. } => failure(format!("Notion API error: {}", error)),
        other => failure(other.to_string()),
    }
}

fn render(envelope: &Value) -> String {
    serde_json::to_string(envelope)
        .unwrap_or_else(|_| r#"{"success":false,"error":"Unserializable result"}"#.to_string())
}
