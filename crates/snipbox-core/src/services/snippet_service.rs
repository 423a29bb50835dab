//! Snippet service - visibility and ownership rules over the snippet store.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{
    CreateSnippetRequest, SnippetFilter, SnippetRecord, SnippetUpdate, UserId,
};
use crate::ports::{RepositoryError, SnippetRepository};

/// Validation message for create requests missing a required field.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: title, code, language";

/// Validation message for updates that blank a required field.
pub const MISSING_REQUIRED_FIELD: &str = "Missing required field";

/// Errors produced by [`SnippetService`].
///
/// `NotAccessible` and `NotOwned` deliberately cover both "does not exist"
/// and "exists but belongs to someone else".
#[derive(Debug, Error)]
pub enum SnippetError {
    /// The operation needs an authenticated caller.
    #[error("Authentication required")]
    Unauthenticated,

    /// Read of a missing or private snippet.
    #[error("Snippet not found or not accessible")]
    NotAccessible,

    /// Mutation of a missing snippet or one owned by someone else.
    #[error("Snippet not found or unauthorized")]
    NotOwned,

    /// Invalid input.
    #[error("{0}")]
    Validation(&'static str),

    /// Store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Require an authenticated caller.
pub fn require_caller(caller: Option<&UserId>) -> Result<&UserId, SnippetError> {
    match caller {
        Some(user) => Ok(user),
        None => Err(SnippetError::Unauthenticated),
    }
}

/// Service for snippet operations.
///
/// Mutating methods take `&UserId`: authentication is settled before the
/// call (see [`require_caller`]). Ownership is checked here, against a
/// fresh lookup, right before each mutation.
pub struct SnippetService {
    repo: Arc<dyn SnippetRepository>,
}

impl SnippetService {
    /// Create a new snippet service.
    pub fn new(repo: Arc<dyn SnippetRepository>) -> Self {
        Self { repo }
    }

    /// List snippets matching `filter`, newest first.
    pub async fn list(&self, filter: &SnippetFilter) -> Result<Vec<SnippetRecord>, SnippetError> {
        Ok(self.repo.list(filter).await?)
    }

    /// Get a snippet visible to `viewer`.
    ///
    /// A missing snippet and a private snippet of another user produce the
    /// same error.
    pub async fn get(
        &self,
        viewer: Option<&UserId>,
        id: &str,
    ) -> Result<SnippetRecord, SnippetError> {
        let record = match self.repo.get_by_id(id).await {
            Ok(record) => record,
            Err(RepositoryError::NotFound(_)) => return Err(SnippetError::NotAccessible),
            Err(e) => return Err(e.into()),
        };

        if !record.snippet.is_visible_to(viewer) {
            return Err(SnippetError::NotAccessible);
        }
        Ok(record)
    }

    /// Create a snippet owned by `owner`.
    pub async fn create(
        &self,
        owner: &UserId,
        request: CreateSnippetRequest,
    ) -> Result<SnippetRecord, SnippetError> {
        let new = request
            .into_new_snippet(owner)
            .ok_or(SnippetError::Validation(MISSING_REQUIRED_FIELDS))?;

        let record = self.repo.insert(&new).await?;
        tracing::info!(snippet_id = %record.snippet.id, owner = %owner, "Snippet created");
        Ok(record)
    }

    /// Apply a partial update to a snippet owned by `caller`.
    pub async fn update(
        &self,
        caller: &UserId,
        id: &str,
        update: &SnippetUpdate,
    ) -> Result<SnippetRecord, SnippetError> {
        self.ensure_owner(caller, id).await?;

        if update.blanks_required_field() {
            return Err(SnippetError::Validation(MISSING_REQUIRED_FIELD));
        }
        if update.is_empty() {
            return Ok(self.repo.get_by_id(id).await?);
        }

        Ok(self.repo.update(id, update).await?)
    }

    /// Delete a snippet owned by `caller`.
    pub async fn delete(&self, caller: &UserId, id: &str) -> Result<(), SnippetError> {
        self.ensure_owner(caller, id).await?;
        self.repo.delete(id).await?;
        tracing::info!(snippet_id = %id, owner = %caller, "Snippet deleted");
        Ok(())
    }

    async fn ensure_owner(&self, caller: &UserId, id: &str) -> Result<(), SnippetError> {
        match self.repo.owner_of(id).await {
            Ok(Some(owner)) if owner == *caller => Ok(()),
            Ok(_) => Err(SnippetError::NotOwned),
            Err(e) => {
                tracing::warn!(snippet_id = %id, error = %e, "Ownership lookup failed");
                Err(SnippetError::NotOwned)
            }
        }
    }
}
