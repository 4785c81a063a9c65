//! Shared test helpers for notion_mcp tests.

#![allow(dead_code)]

use std::sync::Mutex;

use notion_core::client::{NotionApi, NotionError};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the envelope JSON carried in a tool result.
pub fn envelope(result: &CallToolResult) -> Value {
    serde_json::from_str(&get_text(result)).expect("Tool result should carry JSON")
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// A recorded client call: endpoint name and the payload it received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: &'static str,
    pub payload: Value,
}

/// In-memory stand-in for the Notion API.
///
/// Each endpoint serves one canned response, and every invocation is
/// recorded, so tests can assert both on the returned envelope and on the
/// calls (and payloads) that produced it. Calling an endpoint with no
/// canned response panics, which catches tools reaching endpoints they
/// should not.
#[derive(Default)]
pub struct FakeNotion {
    pub create_page_response: Option<Result<Value, NotionError>>,
    pub update_page_response: Option<Result<Value, NotionError>>,
    pub retrieve_page_response: Option<Result<Value, NotionError>>,
    pub search_response: Option<Result<Value, NotionError>>,
    pub list_children_response: Option<Result<Value, NotionError>>,
    pub append_children_response: Option<Result<Value, NotionError>>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl FakeNotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// The endpoints that were called, in order.
    pub fn called_endpoints(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.endpoint)
            .collect()
    }

    /// The payload of the first call to the given endpoint.
    pub fn payload_of(&self, endpoint: &'static str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|call| call.endpoint == endpoint)
            .map(|call| call.payload.clone())
    }

    fn record(&self, endpoint: &'static str, payload: Value) {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { endpoint, payload });
    }

    fn respond(
        &self,
        endpoint: &'static str,
        canned: &Option<Result<Value, NotionError>>,
    ) -> Result<Value, NotionError> {
        canned
            .clone()
            .unwrap_or_else(|| panic!("FakeNotion: unexpected call to {}", endpoint))
    }
}

impl NotionApi for FakeNotion {
    async fn create_page(
        &self,
        parent: Value,
        properties: Value,
        children: Option<Vec<Value>>,
    ) -> Result<Value, NotionError> {
        self.record(
            "create_page",
            json!({"parent": parent, "properties": properties, "children": children}),
        );
        self.respond("create_page", &self.create_page_response)
    }

    async fn update_page(
        &self,
        page_id: &str,
        properties: Option<Value>,
        archived: Option<bool>,
    ) -> Result<Value, NotionError> {
        self.record(
            "update_page",
            json!({"page_id": page_id, "properties": properties, "archived": archived}),
        );
        self.respond("update_page", &self.update_page_response)
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Value, NotionError> {
        self.record("retrieve_page", json!({"page_id": page_id}));
        self.respond("retrieve_page", &self.retrieve_page_response)
    }

    async fn search(
        &self,
        query: Option<&str>,
        filter: Option<Value>,
        sort: Option<Value>,
        page_size: u32,
    ) -> Result<Value, NotionError> {
        self.record(
            "search",
            json!({"query": query, "filter": filter, "sort": sort, "page_size": page_size}),
        );
        self.respond("search", &self.search_response)
    }

    async fn list_block_children(&self, block_id: &str) -> Result<Value, NotionError> {
        self.record("list_block_children", json!({"block_id": block_id}));
        self.respond("list_block_children", &self.list_children_response)
    }

    async fn append_block_children(
        &self,
        block_id: &str,
        children: Vec<Value>,
    ) -> Result<Value, NotionError> {
        self.record(
            "append_block_children",
            json!({"block_id": block_id, "children": children}),
        );
        self.respond("append_block_children", &self.append_children_response)
    }
}

/// A page object as the Notion API returns it.
pub fn page_object(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "url": format!("https://www.notion.so/{}", id),
        "last_edited_time": "2024-01-15T10:00:00.000Z",
        "properties": {
            "title": {"type": "title", "title": [{"plain_text": title}]}
        }
    })
}

/// A search response wrapping the given results.
pub fn search_results(pages: Vec<Value>) -> Value {
    json!({ "results": pages })
}

/// A documented API error, as the client surfaces it.
pub fn api_error(status: u16, code: &str, message: &str) -> NotionError {
    NotionError::Api {
        status,
        code: code.to_string(),
        message: message.to_string(),
    }
}
