//! `SQLite` session-backed identity provider.
//!
//! Besides resolving tokens for the HTTP layer, this type carries the
//! account administration used by the CLI: creating users, saving
//! profiles and issuing or revoking bearer tokens.

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use snipbox_core::{IdentityProvider, Profile, RepositoryError, UserId};

use super::errors::store_error;

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `SQLite` implementation of the `IdentityProvider` trait.
pub struct SqliteIdentityProvider {
    pool: SqlitePool,
}

impl SqliteIdentityProvider {
    /// Create a new identity provider over `pool`.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new user and return its id.
    pub async fn create_user(&self) -> Result<UserId, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO users (id) VALUES (?)")
            .bind(&id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        tracing::debug!(user_id = %id, "User created");
        Ok(UserId::from(id))
    }

    /// Insert or replace the public profile of an existing user.
    pub async fn save_profile(&self, profile: &Profile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, username, avatar_url) VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                username = excluded.username,
                avatar_url = excluded.avatar_url
            "#,
        )
        .bind(profile.id.as_str())
        .bind(&profile.username)
        .bind(&profile.avatar_url)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    /// Issue a bearer token for `user`. `None` means the token never expires.
    pub async fn issue_token(
        &self,
        user: &UserId,
        ttl: Option<Duration>,
    ) -> Result<String, RepositoryError> {
        let token = Uuid::new_v4().simple().to_string();
        let expires_at =
            ttl.map(|ttl| (Utc::now() + ttl).to_rfc3339_opts(SecondsFormat::Millis, true));

        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(user.as_str())
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(token)
    }

    /// Revoke a token. Returns whether a session was removed.
    pub async fn revoke_token(&self, token: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl IdentityProvider for SqliteIdentityProvider {
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, RepositoryError> {
        let user: Option<String> = sqlx::query_scalar(
            "SELECT user_id FROM sessions WHERE token = ? AND (expires_at IS NULL OR expires_at > ?)",
        )
        .bind(token)
        .bind(now_timestamp())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(user.map(UserId::from))
    }
}
