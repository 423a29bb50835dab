//! Core domain types, ports, and services for snipbox.
//!
//! This crate knows nothing about HTTP or SQL. Adapters (`snipbox-db`,
//! `snipbox-axum`, `snipbox-cli`) depend on it and implement or consume
//! the ports defined in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod listing;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CreateSnippetRequest, ListParams, NewSnippet, Profile, ProfileSummary, Snippet,
    SnippetFilter, SnippetRecord, SnippetUpdate, UpdateSnippetRequest, UserId, escape_like,
    fold_case, parse_tags,
};
pub use listing::{LanguageChoice, ListingQuery, distinct_languages, filter_listing};
pub use ports::{IdentityProvider, Repos, RepositoryError, SnippetRepository};
pub use services::{SnippetError, SnippetService, require_caller};

// Dev-dependencies only referenced from unit tests
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
