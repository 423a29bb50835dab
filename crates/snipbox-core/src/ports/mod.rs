//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Filter translation is the adapter's job; the port receives a `SnippetFilter`

pub mod identity;
pub mod snippet_repository;

use std::sync::Arc;
use thiserror::Error;

pub use identity::IdentityProvider;
pub use snippet_repository::SnippetRepository;

#[cfg(test)]
pub use snippet_repository::MockSnippetRepository;

/// Container for all port trait objects.
///
/// Adapters obtain one of these from the storage factory and hand it to
/// the HTTP or CLI composition root.
#[derive(Clone)]
pub struct Repos {
    /// Snippet store.
    pub snippets: Arc<dyn SnippetRepository>,
    /// Bearer token resolution.
    pub identity: Arc<dyn IdentityProvider>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(snippets: Arc<dyn SnippetRepository>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { snippets, identity }
    }
}

/// Generic message for failures outside the known vocabulary.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Domain-specific errors for repository operations.
///
/// Variants carry internal detail for logs. That detail must never reach a
/// client; use [`RepositoryError::public_message`] for anything user-facing.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Foreign-key violation.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Not-null violation.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Storage backend error (database, connection, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Public-facing message for this error.
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "This item already exists",
            Self::InvalidReference(_) => "Invalid reference",
            Self::MissingField(_) => "Missing required field",
            Self::NotFound(_) => "Item not found",
            Self::Storage(_) | Self::Serialization(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}
