//! CLI bootstrap - the composition root for non-server commands.
//!
//! `serve` composes its own context through `snipbox-axum`; every other
//! command gets a [`CliContext`] from here.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use snipbox_core::SnippetService;
use snipbox_db::{CoreFactory, SqliteIdentityProvider, setup_database};

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Snippet rules over the store.
    pub snippets: SnippetService,
    /// Account administration and token issuing.
    pub identity: Arc<SqliteIdentityProvider>,
}

/// Open the database at `db_path` and compose the CLI context.
pub async fn bootstrap(db_path: &Path) -> Result<CliContext> {
    let pool = setup_database(db_path).await?;

    Ok(CliContext {
        snippets: SnippetService::new(CoreFactory::snippet_repository(pool.clone())),
        identity: CoreFactory::identity_provider(pool),
    })
}
