//! Identity provider trait definition.
//!
//! Resolves bearer tokens issued by the identity service to user ids.
//! Issuing tokens is out of scope for this port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::UserId;

/// Resolves a bearer token to the authenticated user, if any.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `Ok(None)` for unknown or expired tokens.
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, RepositoryError>;
}
