//! Notion API client and response shaping.
//!
//! This crate owns the HTTP boundary to the Notion API: the request payload
//! shapes Notion expects, the client that issues calls, and the
//! normalization of the heterogeneous objects it returns.

pub mod client;
pub mod normalize;
pub mod payload;

pub use client::{NotionApi, NotionClient, NotionError};
