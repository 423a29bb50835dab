//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use snipbox_core::{ProfileSummary, RepositoryError, Snippet, SnippetRecord, UserId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for snippet queries joined with profiles.
///
/// Must be used with `FROM snippets s LEFT JOIN profiles p ON p.id = s.user_id`.
pub const SNIPPET_SELECT_COLUMNS: &str = "s.id, s.title, s.description, s.code, s.language, s.tags, s.is_public, s.user_id, s.created_at, p.id AS profile_id, p.username, p.avatar_url";

/// FROM clause matching [`SNIPPET_SELECT_COLUMNS`].
pub const SNIPPET_FROM: &str = "FROM snippets s LEFT JOIN profiles p ON p.id = s.user_id";

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a stored timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp {value:?}: {e}")))
}

/// Parse a database row into a `SnippetRecord`.
pub fn row_to_record(row: &SqliteRow) -> Result<SnippetRecord, RepositoryError> {
    let tags_json: String = column(row, "tags")?;
    let tags: Vec<String> = serde_json::from_str(&tags_json)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let created_at: String = column(row, "created_at")?;
    let user_id: String = column(row, "user_id")?;

    let profile_id: Option<String> = column(row, "profile_id")?;
    let profiles = match profile_id {
        Some(_) => Some(ProfileSummary {
            username: column(row, "username")?,
            avatar_url: column(row, "avatar_url")?,
        }),
        None => None,
    };

    Ok(SnippetRecord {
        snippet: Snippet {
            id: column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            code: column(row, "code")?,
            language: column(row, "language")?,
            tags,
            is_public: column(row, "is_public")?,
            user_id: UserId::from(user_id),
            created_at: parse_timestamp(&created_at)?,
        },
        profiles,
    })
}
