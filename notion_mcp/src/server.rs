//! Core MCP server implementation for Notion.

use log::debug;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::wrapper::Parameters, model::*, service::RequestContext, tool, tool_handler,
    tool_router, transport::stdio,
};

use notion_core::NotionClient;

use crate::resources;
use crate::tools::{
    self, AppendToPageParams, CreateDatabaseEntryParams, CreatePageParams, GetPageContentParams,
    SearchPagesParams, UpdatePageParams,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for a Notion workspace.
///
/// Exposes page and database operations as MCP tools, and the recent-pages
/// listing as an MCP resource. Holds no state beyond the API client; every
/// tool call is a fresh round trip to Notion.
#[derive(Clone)]
pub struct NotionMcpServer {
    notion: NotionClient,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<NotionMcpServer>,
}

#[tool_router]
impl NotionMcpServer {
    /// Create a new MCP server backed by the given Notion client.
    pub fn new(notion: NotionClient) -> Self {
        Self {
            notion,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Create a new page in Notion with a title and text content. \
        Provide parent_page_id to choose where the page lives; without it, the first page \
        found by search is used as the parent.")]
    async fn create_page(
        &self,
        Parameters(params): Parameters<CreatePageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_page, title={}", params.title);
        Ok(tools::create_page::execute(&self.notion, &params).await)
    }

    #[tool(description = "Search for pages in Notion by title or content. \
        Returns up to page_size results with each page's title, ID, URL, and last edit time.")]
    async fn search_pages(
        &self,
        Parameters(params): Parameters<SearchPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: search_pages, query={}, page_size={}",
            params.query, params.page_size
        );
        Ok(tools::search_pages::execute(&self.notion, &params).await)
    }

    #[tool(description = "Retrieve a Notion page's title and text content. \
        Returns the page metadata and the plain text of its direct child blocks.")]
    async fn get_page_content(
        &self,
        Parameters(params): Parameters<GetPageContentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_page_content, page_id={}", params.page_id);
        Ok(tools::get_page_content::execute(&self.notion, &params).await)
    }

    #[tool(description = "Append a paragraph of text to an existing Notion page.")]
    async fn append_to_page(
        &self,
        Parameters(params): Parameters<AppendToPageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: append_to_page, page_id={}", params.page_id);
        Ok(tools::append_to_page::execute(&self.notion, &params).await)
    }

    #[tool(description = "Update a Notion page's title or archived state. \
        At least one of title or archived must be provided.")]
    async fn update_page(
        &self,
        Parameters(params): Parameters<UpdatePageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: update_page, page_id={}", params.page_id);
        Ok(tools::update_page::execute(&self.notion, &params).await)
    }

    #[tool(description = "Create a new entry in a Notion database. \
        The properties map must match the target database's schema; Notion validates it. \
        Example: {\"Name\": {\"title\": [{\"text\": {\"content\": \"Task name\"}}]}, \
        \"Status\": {\"select\": {\"name\": \"In Progress\"}}}")]
    async fn create_database_entry(
        &self,
        Parameters(params): Parameters<CreateDatabaseEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: create_database_entry, database_id={}",
            params.database_id
        );
        Ok(tools::create_database_entry::execute(&self.notion, &params).await)
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for NotionMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Notion MCP server. Use tools to create, search, and update pages and \
                 database entries. Read the recent-pages resource for a listing of \
                 recently edited pages."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        debug!("Listing resources");
        Ok(ListResourcesResult {
            resources: vec![resources::recent_pages_resource()],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let uri = &request.uri;
        debug!("Reading resource: {}", uri);

        if uri != resources::RECENT_PAGES_URI {
            return Err(McpError::resource_not_found(
                format!("Unknown resource URI: {}", uri),
                None,
            ));
        }

        let listing = resources::recent_pages(&self.notion).await;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(listing, uri.clone())],
        })
    }
}
