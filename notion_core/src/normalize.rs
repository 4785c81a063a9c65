//! Normalization of raw Notion objects into presentable values.
//!
//! Pages carry their title inside a `properties` map whose keys are defined
//! per database schema, so the title has to be located by its `type` tag
//! rather than by name. Blocks nest their text under a sub-object named
//! after the block type. The functions here flatten both shapes.

use serde_json::{Value, json};

/// Fallback title for pages without a usable title property.
pub const UNTITLED: &str = "Untitled";

/// Extract a page's title from its `properties` map.
///
/// Prefers the property literally named `"title"` when it is tagged as a
/// title and non-empty; otherwise scans all properties in map order for the
/// first title-tagged entry. Returns [`UNTITLED`] when no usable title
/// exists.
pub fn extract_title(object: &Value) -> String {
    let Some(properties) = object.get("properties").and_then(Value::as_object) else {
        return UNTITLED.to_string();
    };

    // Plain pages name the property "title"; database entries name it per
    // schema, so fall back to locating it by tag.
    if let Some(title) = properties.get("title").and_then(title_text) {
        return title;
    }
    properties
        .values()
        .find_map(title_text)
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// The first fragment's plain text, if this property is a non-empty title.
fn title_text(property: &Value) -> Option<String> {
    if property.get("type").and_then(Value::as_str) != Some("title") {
        return None;
    }
    property
        .get("title")?
        .as_array()?
        .first()?
        .get("plain_text")?
        .as_str()
        .map(str::to_string)
}

/// Extract the plain text of a content block.
///
/// Concatenates every `plain_text` fragment in the block's `rich_text`.
/// Returns `None` for blocks without rich text, or whose text is empty,
/// so callers can omit them from output.
pub fn extract_block_text(block: &Value) -> Option<String> {
    let block_type = block.get("type").and_then(Value::as_str)?;
    let rich_text = block.get(block_type)?.get("rich_text")?.as_array()?;

    let text: String = rich_text
        .iter()
        .filter_map(|fragment| fragment.get("plain_text").and_then(Value::as_str))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

/// Project a page or search hit into the `{id, title, url, last_edited}`
/// shape used in search results.
pub fn page_summary(page: &Value) -> Value {
    json!({
        "id": page.get("id").cloned().unwrap_or(Value::Null),
        "title": extract_title(page),
        "url": page.get("url").cloned().unwrap_or(Value::Null),
        "last_edited": page
            .get("last_edited_time")
            .cloned()
            .unwrap_or_else(|| json!("Unknown")),
    })
}
