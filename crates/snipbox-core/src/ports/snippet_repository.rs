//! Snippet repository trait definition.
//!
//! This port defines the interface for snippet persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewSnippet, SnippetFilter, SnippetRecord, SnippetUpdate, UserId};

/// Repository for snippet persistence operations.
///
/// Every method returning a [`SnippetRecord`] joins the owner's profile
/// (left-outer). Listing order is newest first.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - No authorization: callers (the service) decide who may do what
/// - Each call is atomic on its own; nothing spans calls
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// List snippets matching `filter`, newest first.
    async fn list(&self, filter: &SnippetFilter) -> Result<Vec<SnippetRecord>, RepositoryError>;

    /// Get a snippet by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the snippet doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<SnippetRecord, RepositoryError>;

    /// Current owner of a snippet, or `None` if it doesn't exist.
    async fn owner_of(&self, id: &str) -> Result<Option<UserId>, RepositoryError>;

    /// Insert a new snippet.
    ///
    /// The store assigns `id` and `created_at`.
    async fn insert(&self, snippet: &NewSnippet) -> Result<SnippetRecord, RepositoryError>;

    /// Apply a partial update and return the updated record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the snippet doesn't exist.
    async fn update(
        &self,
        id: &str,
        update: &SnippetUpdate,
    ) -> Result<SnippetRecord, RepositoryError>;

    /// Delete a snippet by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the snippet doesn't exist.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
