//! Snippet domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::ProfileSummary;
use super::serde_helpers::double_option;

/// Opaque identifier of an authenticated user (the snippet owner reference).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A snippet that exists in the store.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards. `user_id` is bound once, at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub language: String,
    /// Display order is preserved; duplicates are not removed.
    pub tags: Vec<String>,
    pub is_public: bool,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    /// Whether `viewer` may read this snippet.
    pub fn is_visible_to(&self, viewer: Option<&UserId>) -> bool {
        self.is_public || self.is_owned_by(viewer)
    }

    pub fn is_owned_by(&self, user: Option<&UserId>) -> bool {
        user.is_some_and(|u| *u == self.user_id)
    }
}

/// A snippet joined with its owner's profile.
///
/// Serializes flat, with the profile nested under `profiles` (or `null`
/// when the owner has no profile row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    #[serde(flatten)]
    pub snippet: Snippet,
    pub profiles: Option<ProfileSummary>,
}

/// A snippet to be inserted (no id or timestamp yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub user_id: UserId,
}

/// Request body for creating a snippet.
///
/// Every field is optional at the wire level so that a missing field is a
/// validation failure rather than a body parse failure. Any `user_id` sent
/// by the client is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSnippetRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl CreateSnippetRequest {
    /// Bind the request to `owner`, applying defaults.
    ///
    /// Returns `None` when `title`, `code` or `language` is missing or empty.
    pub fn into_new_snippet(self, owner: &UserId) -> Option<NewSnippet> {
        let title = self.title.filter(|s| !s.is_empty())?;
        let code = self.code.filter(|s| !s.is_empty())?;
        let language = self.language.filter(|s| !s.is_empty())?;

        Some(NewSnippet {
            title,
            description: self.description.filter(|s| !s.is_empty()),
            code,
            language,
            tags: self.tags.unwrap_or_default(),
            is_public: self.is_public.unwrap_or(true),
            user_id: owner.clone(),
        })
    }
}

/// Partial snippet update.
///
/// Absent fields are left untouched. `description` is `Option<Option<_>>`:
/// - `None` = don't change
/// - `Some(None)` = clear (explicit `null`)
/// - `Some(Some(value))` = set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Wire name for update request bodies.
pub type UpdateSnippetRequest = SnippetUpdate;

impl SnippetUpdate {
    /// True when the update would not change anything.
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.code.is_none()
            && self.language.is_none()
            && self.tags.is_none()
            && self.is_public.is_none()
    }

    /// True when a required field is supplied but empty.
    pub fn blanks_required_field(&self) -> bool {
        [&self.title, &self.code, &self.language]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(str::is_empty))
    }

    /// Apply this update to `snippet` in place.
    pub fn apply_to(&self, snippet: &mut Snippet) {
        if let Some(title) = &self.title {
            snippet.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            snippet.description.clone_from(description);
        }
        if let Some(code) = &self.code {
            snippet.code.clone_from(code);
        }
        if let Some(language) = &self.language {
            snippet.language.clone_from(language);
        }
        if let Some(tags) = &self.tags {
            snippet.tags.clone_from(tags);
        }
        if let Some(is_public) = self.is_public {
            snippet.is_public = is_public;
        }
    }
}
