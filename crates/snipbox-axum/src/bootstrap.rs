//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the `SQLite` adapters are wired to
//! the HTTP layer.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use snipbox_core::{IdentityProvider, Repos, SnippetService};
use snipbox_db::{CoreFactory, setup_database};

/// Default name of the API mount point.
pub const DEFAULT_API_NAME: &str = "snippets-api";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8787;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// `Access-Control-Allow-Origin: *`.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Final path segment of the collection route.
    pub api_name: String,
    /// Prefix in front of the API name, e.g. `/functions/v1`. Empty for none.
    pub base_path: String,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from("snipbox.db"),
            api_name: DEFAULT_API_NAME.to_string(),
            base_path: String::new(),
            cors: CorsConfig::default(),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    #[must_use]
    pub fn with_api_name(mut self, name: impl Into<String>) -> Self {
        self.api_name = name.into();
        self
    }

    #[must_use]
    pub fn with_base_path(mut self, base: impl Into<String>) -> Self {
        self.base_path = base.into();
        self
    }

    /// Set CORS to allow specific origins. An empty list keeps `AllowAll`.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }

    /// Collection path: `/{base_path}/{api_name}` with redundant slashes removed.
    pub fn api_path(&self) -> String {
        self.base_path
            .split('/')
            .chain(self.api_name.split('/'))
            .filter(|segment| !segment.is_empty())
            .fold(String::new(), |mut path, segment| {
                path.push('/');
                path.push_str(segment);
                path
            })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Snippet rules over the store.
    pub snippets: SnippetService,
    /// Bearer token resolution.
    pub identity: Arc<dyn IdentityProvider>,
}

impl AxumContext {
    /// Build the context from port implementations.
    pub fn new(repos: Repos) -> Self {
        Self {
            snippets: SnippetService::new(repos.snippets),
            identity: repos.identity,
        }
    }
}

/// Open the database and build the context.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        database_path = %config.database_path.display(),
        api_path = %config.api_path(),
        "Axum bootstrap resolved configuration"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::new(CoreFactory::build_repos(pool)))
}

/// Bootstrap and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        "snipbox API listening on http://{}{}",
        listener.local_addr()?,
        config.api_path()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_path() {
        assert_eq!(ServerConfig::with_defaults().api_path(), "/snippets-api");
    }

    #[test]
    fn test_api_path_normalizes_slashes() {
        let config = ServerConfig::with_defaults()
            .with_base_path("functions/v1/")
            .with_api_name("/snippets-api");
        assert_eq!(config.api_path(), "/functions/v1/snippets-api");
    }

    #[test]
    fn test_empty_origin_list_keeps_allow_all() {
        let config = ServerConfig::with_defaults().with_allowed_origins(vec![]);
        assert_eq!(config.cors, CorsConfig::AllowAll);

        let config = config.with_allowed_origins(vec!["https://app.example".to_string()]);
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(_)));
    }
}
