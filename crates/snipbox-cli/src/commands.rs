//! Subcommand definitions.

use clap::{Args, Subcommand};

use snipbox_axum::bootstrap::{DEFAULT_API_NAME, DEFAULT_PORT};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Manage user accounts
    #[command(subcommand)]
    User(UserCommand),

    /// Manage bearer tokens
    #[command(subcommand)]
    Token(TokenCommand),

    /// List public snippets, optionally narrowed by text and language
    Browse {
        /// Case-insensitive text matched against title, description and tags
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact language label, or "all"
        #[arg(short, long, default_value = "all")]
        language: String,
    },
}

/// Options for `serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "SNIPBOX_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SNIPBOX_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Final path segment of the API
    #[arg(long, env = "SNIPBOX_API_NAME", default_value = DEFAULT_API_NAME)]
    pub api_name: String,

    /// Prefix in front of the API name
    #[arg(long, env = "SNIPBOX_BASE_PATH", default_value = "")]
    pub base_path: String,

    /// Comma-separated allowed origins; empty allows any origin
    #[arg(long, env = "SNIPBOX_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

/// `user` subcommands.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a user with a public profile
    Create {
        /// Public username (unique)
        username: String,
        /// Avatar image URL
        #[arg(long)]
        avatar_url: Option<String>,
        /// Also issue a non-expiring token
        #[arg(long)]
        with_token: bool,
    },
}

/// `token` subcommands.
#[derive(Subcommand)]
pub enum TokenCommand {
    /// Issue a bearer token for a user
    Issue {
        /// User id
        user_id: String,
        /// Lifetime in hours; omit for a non-expiring token
        #[arg(long)]
        ttl_hours: Option<i64>,
    },
    /// Revoke a bearer token
    Revoke {
        /// Token to revoke
        token: String,
    },
}
