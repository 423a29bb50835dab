//! Serve command handler.

use anyhow::Result;
use std::path::Path;

use crate::commands::ServeArgs;
use snipbox_axum::{ServerConfig, start_server};

/// Translate CLI options into a server configuration.
pub fn server_config(args: ServeArgs, database: &Path) -> ServerConfig {
    let origins = args
        .cors_origins
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    ServerConfig::with_defaults()
        .with_host(args.host)
        .with_port(args.port)
        .with_database_path(database)
        .with_api_name(args.api_name)
        .with_base_path(args.base_path)
        .with_allowed_origins(origins)
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(args: ServeArgs, database: &Path) -> Result<()> {
    start_server(server_config(args, database)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipbox_axum::CorsConfig;

    fn args(origins: &[&str]) -> ServeArgs {
        ServeArgs {
            host: "0.0.0.0".to_string(),
            port: 9000,
            api_name: "snippets-api".to_string(),
            base_path: "/functions/v1".to_string(),
            cors_origins: origins.iter().map(|o| (*o).to_string()).collect(),
        }
    }

    #[test]
    fn test_server_config_from_args() {
        let config = server_config(args(&[]), Path::new("/tmp/s.db"));
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.api_path(), "/functions/v1/snippets-api");
        assert_eq!(config.cors, CorsConfig::AllowAll);
    }

    #[test]
    fn test_blank_origins_are_dropped() {
        let config = server_config(args(&["", " https://a.example "]), Path::new("s.db"));
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["https://a.example".to_string()])
        );
    }
}
