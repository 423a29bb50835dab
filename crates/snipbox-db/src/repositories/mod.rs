//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod errors;
mod row_mappers;
mod sqlite_identity_provider;
mod sqlite_snippet_repository;

pub use sqlite_identity_provider::SqliteIdentityProvider;
pub use sqlite_snippet_repository::{SqliteSnippetRepository, build_list_query};
