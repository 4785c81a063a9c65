//! MCP server for Notion workspaces.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! Notion page and database operations to AI assistants like Claude.

pub mod envelope;
pub mod resources;
mod server;
pub mod tools;

pub use server::{NotionMcpServer, ServerError};
