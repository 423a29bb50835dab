//! Composition utilities for wiring `SQLite` adapters into the core ports.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use snipbox_core::Repos;

use crate::repositories::{SqliteIdentityProvider, SqliteSnippetRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all port implementations from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Self::snippet_repository(pool.clone()),
            Self::identity_provider(pool),
        )
    }

    /// Create a snippet repository from a pool.
    pub fn snippet_repository(pool: SqlitePool) -> Arc<SqliteSnippetRepository> {
        Arc::new(SqliteSnippetRepository::new(pool))
    }

    /// Create an identity provider from a pool.
    pub fn identity_provider(pool: SqlitePool) -> Arc<SqliteIdentityProvider> {
        Arc::new(SqliteIdentityProvider::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Wraps an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Port container backed by this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Create a snippet repository using this test database.
    pub fn snippet_repository(&self) -> SqliteSnippetRepository {
        SqliteSnippetRepository::new(self.pool.clone())
    }

    /// Create an identity provider using this test database.
    pub fn identity(&self) -> SqliteIdentityProvider {
        SqliteIdentityProvider::new(self.pool.clone())
    }
}
