//! Command-line interface for snipbox: run the API server, administer
//! users and tokens, and browse public snippets from a terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, ServeArgs, TokenCommand, UserCommand};
pub use parser::Cli;
