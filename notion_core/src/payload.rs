//! Request payload shapes required by the Notion API.
//!
//! The API rejects payloads that deviate from these shapes, so they are
//! built in one place and reused by every operation.

use serde_json::{Value, json};

/// A paragraph block wrapping one run of plain text.
pub fn paragraph_block(content: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": {
            "rich_text": [
                {"type": "text", "text": {"content": content}}
            ]
        }
    })
}

/// The properties map carrying a page title.
pub fn title_properties(title: &str) -> Value {
    json!({
        "title": {
            "title": [
                {"text": {"content": title}}
            ]
        }
    })
}

/// Parent reference for a page.
pub fn page_parent(page_id: &str) -> Value {
    json!({ "page_id": page_id })
}

/// Parent reference for a database.
pub fn database_parent(database_id: &str) -> Value {
    json!({ "database_id": database_id })
}

/// Search filter restricting results to pages.
pub fn page_filter() -> Value {
    json!({ "property": "object", "value": "page" })
}

/// Search sort returning the most recently edited pages first.
pub fn recent_first_sort() -> Value {
    json!({ "direction": "descending", "timestamp": "last_edited_time" })
}
