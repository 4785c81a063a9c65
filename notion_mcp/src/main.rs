//! Entry point for the Notion MCP server binary.

use clap::Parser;
use log::info;

use notion_core::NotionClient;
use notion_mcp::{NotionMcpServer, ServerError};

/// Defines the command-line interface of the server with clap.
///
/// The integration token is required; startup fails without one.
#[derive(Parser, Debug)]
#[command(name = "notion-mcp")]
#[command(version, about = "Notion MCP server: pages and databases over stdio.")]
struct Cli {
    /// Notion integration token.
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the Notion API.
    #[arg(long, env = "NOTION_API_URL", default_value = notion_core::client::DEFAULT_BASE_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    // env_logger writes to stderr, keeping stdout clean for the transport.
    env_logger::init();

    let cli = Cli::parse();

    info!("Starting Notion MCP server");
    let notion = NotionClient::with_base_url(cli.api_key, cli.api_url);
    NotionMcpServer::new(notion).serve_stdio().await
}
