//! Domain types for snipbox.
//!
//! These types represent snippets and their owners independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod filter;
mod profile;
mod serde_helpers;
mod snippet;

pub use filter::{ListParams, SnippetFilter, escape_like, fold_case, parse_tags};
pub use profile::{Profile, ProfileSummary};
pub use snippet::{
    CreateSnippetRequest, NewSnippet, Snippet, SnippetRecord, SnippetUpdate,
    UpdateSnippetRequest, UserId,
};
