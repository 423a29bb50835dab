//! `SQLite` storage adapters for snipbox.
//!
//! Implements the `snipbox-core` ports over a `sqlx` pool and exposes the
//! schema setup used by the server and CLI entry points.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;

#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::{SqliteIdentityProvider, SqliteSnippetRepository, build_list_query};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
