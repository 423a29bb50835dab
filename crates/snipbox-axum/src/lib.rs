//! Axum HTTP adapter for snipbox.
//!
//! Exposes the snippet API (`/{api_name}` and `/{api_name}/{id}`) over the
//! core `SnippetService`, with CORS, bearer-token caller resolution, error
//! translation and panic recovery.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for unit tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use chrono as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use auth::Caller;
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
