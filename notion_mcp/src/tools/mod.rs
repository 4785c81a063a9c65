//! MCP tool implementations for Notion.

pub mod append_to_page;
pub mod create_database_entry;
pub mod create_page;
pub mod get_page_content;
pub mod search_pages;
pub mod update_page;

pub use append_to_page::AppendToPageParams;
pub use create_database_entry::CreateDatabaseEntryParams;
pub use create_page::CreatePageParams;
pub use get_page_content::GetPageContentParams;
pub use search_pages::SearchPagesParams;
pub use update_page::UpdatePageParams;
