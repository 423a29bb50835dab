//! Command handlers.
//!
//! Handlers are thin wrappers: parse CLI input, call the core service or
//! identity adapter, format output for the terminal.

pub mod browse;
pub mod serve;
pub mod token;
pub mod user;
