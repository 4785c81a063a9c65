//! HTTP boundary to the Notion API.
//!
//! [`NotionApi`] is the seam the tool implementations are written against;
//! [`NotionClient`] is the reqwest-backed implementation used in production.

use std::fmt;

use log::debug;
use reqwest::Method;
use serde_json::{Value, json};

/// Base URL of the hosted Notion API.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

/// Errors produced by Notion API calls.
///
/// `Api` carries a documented error object returned by the service itself;
/// `Transport` covers everything that prevented a usable response (connection
/// faults, invalid response bodies).
#[derive(Debug, Clone, PartialEq)]
pub enum NotionError {
    /// The API responded with a documented error object.
    Api {
        status: u16,
        code: String,
        message: String,
    },
    /// The request never produced a usable response.
    Transport(String),
}

impl fmt::Display for NotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotionError::Api {
                status,
                code,
                message,
            } => {
                write!(f, "{} ({}): {}", status, code, message)
            }
            NotionError::Transport(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for NotionError {}

/// Operations the Notion API offers to this server.
///
/// Each method performs exactly one call. Optional arguments are omitted
/// from the request body entirely when `None`.
#[allow(async_fn_in_trait)]
pub trait NotionApi {
    /// Create a page under the given parent.
    async fn create_page(
        &self,
        parent: Value,
        properties: Value,
        children: Option<Vec<Value>>,
    ) -> Result<Value, NotionError>;

    /// Apply a partial update to a page. Only supplied fields are sent.
    async fn update_page(
        &self,
        page_id: &str,
        properties: Option<Value>,
        archived: Option<bool>,
    ) -> Result<Value, NotionError>;

    /// Retrieve a page's metadata.
    async fn retrieve_page(&self, page_id: &str) -> Result<Value, NotionError>;

    /// Search the workspace.
    async fn search(
        &self,
        query: Option<&str>,
        filter: Option<Value>,
        sort: Option<Value>,
        page_size: u32,
    ) -> Result<Value, NotionError>;

    /// List the direct children of a block (or page).
    async fn list_block_children(&self, block_id: &str) -> Result<Value, NotionError>;

    /// Append child blocks to a block (or page).
    async fn append_block_children(
        &self,
        block_id: &str,
        children: Vec<Value>,
    ) -> Result<Value, NotionError>;
}

/// Authenticated client for the Notion API.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NotionClient {
    /// Create a client against the hosted Notion API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, NotionError> {
        debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotionError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| NotionError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| NotionError::Transport(format!("Invalid JSON from Notion: {}", e)))
    }
}

/// Map a non-2xx response to an API error.
///
/// Notion error bodies carry `code` and `message` fields; responses without
/// them still count as API errors, with the raw body as the message.
fn api_error(status: u16, body: &str) -> NotionError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    match parsed {
        Some(error) if error.get("message").is_some() => NotionError::Api {
            status,
            code: error
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        _ => NotionError::Api {
            status,
            code: "unknown".to_string(),
            message: body.trim().to_string(),
        },
    }
}

impl NotionApi for NotionClient {
    async fn create_page(
        &self,
        parent: Value,
        properties: Value,
        children: Option<Vec<Value>>,
    ) -> Result<Value, NotionError> {
        let mut body = json!({
            "parent": parent,
            "properties": properties,
        });
        if let Some(children) = children {
            body["children"] = Value::Array(children);
        }
        self.request(Method::POST, "/pages", Some(&body)).await
    }

    async fn update_page(
        &self,
        page_id: &str,
        properties: Option<Value>,
        archived: Option<bool>,
    ) -> Result<Value, NotionError> {
        let mut body = json!({});
        if let Some(properties) = properties {
            body["properties"] = properties;
        }
        if let Some(archived) = archived {
            body["archived"] = Value::Bool(archived);
        }
        self.request(Method::PATCH, &format!("/pages/{}", page_id), Some(&body))
            .await
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Value, NotionError> {
        self.request(Method::GET, &format!("/pages/{}", page_id), None)
            .await
    }

    async fn search(
        &self,
        query: Option<&str>,
        filter: Option<Value>,
        sort: Option<Value>,
        page_size: u32,
    ) -> Result<Value, NotionError> {
        let mut body = json!({ "page_size": page_size });
        if let Some(query) = query {
            body["query"] = Value::String(query.to_string());
        }
        if let Some(filter) = filter {
            body["filter"] = filter;
        }
        if let Some(sort) = sort {
            body["sort"] = sort;
        }
        self.request(Method::POST, "/search", Some(&body)).await
    }

    async fn list_block_children(&self, block_id: &str) -> Result<Value, NotionError> {
        self.request(Method::GET, &format!("/blocks/{}/children", block_id), None)
            .await
    }

    async fn append_block_children(
        &self,
        block_id: &str,
        children: Vec<Value>,
    ) -> Result<Value, NotionError> {
        let body = json!({ "children": children });
        self.request(
            Method::PATCH,
            &format!("/blocks/{}/children", block_id),
            Some(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_api_error_from_notion_body() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find page."}"#;
        let error = api_error(404, body);

        assert_matches!(error, NotionError::Api { status: 404, .. });
        assert_eq!(
            error.to_string(),
            "404 (object_not_found): Could not find page."
        );
    }

    #[test]
    fn test_api_error_from_opaque_body() {
        let error = api_error(502, "Bad Gateway\n");

        assert_matches!(
            error,
            NotionError::Api {
                status: 502,
                ref code,
                ref message,
            } if code == "unknown" && message == "Bad Gateway"
        );
    }

    #[test]
    fn test_transport_error_displays_bare_message() {
        let error = NotionError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = NotionClient::with_base_url("secret", "http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
