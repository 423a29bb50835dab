//! Core services.
//!
//! Services orchestrate ports and hold the domain rules. Adapters call
//! services; they never talk to repositories directly for mutations.

mod snippet_service;

pub use snippet_service::{
    MISSING_REQUIRED_FIELD, MISSING_REQUIRED_FIELDS, SnippetError, SnippetService,
    require_caller,
};
