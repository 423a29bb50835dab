//! `SQLite` implementation of the `SnippetRepository` trait.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use snipbox_core::{
    NewSnippet, RepositoryError, SnippetFilter, SnippetRecord, SnippetRepository, SnippetUpdate,
    UserId, fold_case,
};

use super::errors::store_error;
use super::row_mappers::{SNIPPET_FROM, SNIPPET_SELECT_COLUMNS, row_to_record};

/// Compose the listing query for `filter`.
///
/// Every condition is a bound parameter. Search runs the folded
/// [`SnippetFilter::search_pattern`] against the `*_folded` columns, since
/// `LIKE` only ignores case for ASCII letters.
pub fn build_list_query(filter: &SnippetFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {SNIPPET_SELECT_COLUMNS} {SNIPPET_FROM} WHERE "
    ));

    match &filter.owner {
        Some(owner) => {
            builder.push("s.user_id = ");
            builder.push_bind(owner.as_str().to_string());
        }
        None => {
            builder.push("s.is_public = 1");
        }
    }

    if let Some(language) = &filter.language {
        builder.push(" AND s.language = ");
        builder.push_bind(language.clone());
    }

    for tag in &filter.tags {
        builder.push(" AND EXISTS (SELECT 1 FROM json_each(s.tags) WHERE json_each.value = ");
        builder.push_bind(tag.clone());
        builder.push(")");
    }

    if let Some(pattern) = filter.search_pattern() {
        builder.push(" AND (s.title_folded LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR s.description_folded LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }

    builder.push(" ORDER BY s.created_at DESC, s.rowid DESC");
    builder
}

fn tags_json(tags: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(tags).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// `SQLite` implementation of the `SnippetRepository` trait.
pub struct SqliteSnippetRepository {
    pool: SqlitePool,
}

impl SqliteSnippetRepository {
    /// Create a new `SQLite` snippet repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetRepository for SqliteSnippetRepository {
    async fn list(&self, filter: &SnippetFilter) -> Result<Vec<SnippetRecord>, RepositoryError> {
        let mut builder = build_list_query(filter);
        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        rows.iter().map(row_to_record).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<SnippetRecord, RepositoryError> {
        let query = format!("SELECT {SNIPPET_SELECT_COLUMNS} {SNIPPET_FROM} WHERE s.id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Snippet with ID {id}")))?;

        row_to_record(&row)
    }

    async fn owner_of(&self, id: &str) -> Result<Option<UserId>, RepositoryError> {
        let owner: Option<String> =
            sqlx::query_scalar("SELECT user_id FROM snippets WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(owner.map(UserId::from))
    }

    async fn insert(&self, snippet: &NewSnippet) -> Result<SnippetRecord, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO snippets (
                id, title, description, code, language, tags, is_public, user_id,
                title_folded, description_folded
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&snippet.title)
        .bind(&snippet.description)
        .bind(&snippet.code)
        .bind(&snippet.language)
        .bind(tags_json(&snippet.tags)?)
        .bind(snippet.is_public)
        .bind(snippet.user_id.as_str())
        .bind(fold_case(&snippet.title))
        .bind(snippet.description.as_deref().map(fold_case))
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        self.get_by_id(&id).await
    }

    async fn update(
        &self,
        id: &str,
        update: &SnippetUpdate,
    ) -> Result<SnippetRecord, RepositoryError> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE snippets SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(title) = &update.title {
                set.push("title = ");
                set.push_bind_unseparated(title.clone());
                set.push("title_folded = ");
                set.push_bind_unseparated(fold_case(title));
            }
            if let Some(description) = &update.description {
                set.push("description = ");
                set.push_bind_unseparated(description.clone());
                set.push("description_folded = ");
                set.push_bind_unseparated(description.as_deref().map(fold_case));
            }
            if let Some(code) = &update.code {
                set.push("code = ");
                set.push_bind_unseparated(code.clone());
            }
            if let Some(language) = &update.language {
                set.push("language = ");
                set.push_bind_unseparated(language.clone());
            }
            if let Some(tags) = &update.tags {
                set.push("tags = ");
                set.push_bind_unseparated(tags_json(tags)?);
            }
            if let Some(is_public) = update.is_public {
                set.push("is_public = ");
                set.push_bind_unseparated(is_public);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id.to_string());

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Snippet with ID {id}")));
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Snippet with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TestDb;
    use snipbox_core::Profile;

    fn new_snippet(owner: &UserId, title: &str, tags: &[&str], is_public: bool) -> NewSnippet {
        NewSnippet {
            title: title.to_string(),
            description: Some(format!("About {title}")),
            code: "fn main() {}".to_string(),
            language: "Rust".to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            is_public,
            user_id: owner.clone(),
        }
    }

    async fn setup() -> (TestDb, SqliteSnippetRepository, UserId, UserId) {
        let db = TestDb::new().await.unwrap();
        let identity = db.identity();
        let alice = identity.create_user().await.unwrap();
        let bob = identity.create_user().await.unwrap();
        identity
            .save_profile(&Profile {
                id: alice.clone(),
                username: Some("alice".to_string()),
                avatar_url: None,
            })
            .await
            .unwrap();
        let repo = db.snippet_repository();
        (db, repo, alice, bob)
    }

    #[test]
    fn test_list_query_public_default() {
        let sql = build_list_query(&SnippetFilter::public()).sql().to_string();
        assert!(sql.contains("WHERE s.is_public = 1"));
        assert!(sql.contains("LEFT JOIN profiles p"));
        assert!(sql.ends_with("ORDER BY s.created_at DESC, s.rowid DESC"));
        assert!(!sql.contains("LIKE"));
    }

    #[test]
    fn test_list_query_owner_drops_visibility() {
        let sql = build_list_query(&SnippetFilter::owned_by(UserId::new("u1")))
            .sql()
            .to_string();
        assert!(sql.contains("WHERE s.user_id = ?"));
        assert!(!sql.contains("is_public = 1"));
    }

    #[test]
    fn test_list_query_one_exists_per_tag() {
        let filter = SnippetFilter {
            tags: vec!["a".to_string(), "b".to_string()],
            search: Some("x".to_string()),
            ..SnippetFilter::default()
        };
        let sql = build_list_query(&filter).sql().to_string();
        assert_eq!(sql.matches("json_each(s.tags)").count(), 2);
        assert_eq!(sql.matches("ESCAPE '\\'").count(), 2);
        assert!(sql.contains("s.title_folded LIKE"));
        assert!(sql.contains("s.description_folded LIKE"));
    }

    #[tokio::test]
    async fn test_insert_and_get_with_profile() {
        let (_db, repo, alice, bob) = setup().await;

        let created = repo
            .insert(&new_snippet(&alice, "Debounce", &["js"], true))
            .await
            .unwrap();
        assert_eq!(created.snippet.user_id, alice);
        assert_eq!(created.snippet.tags, vec!["js"]);
        assert_eq!(
            created.profiles.as_ref().and_then(|p| p.username.as_deref()),
            Some("alice")
        );

        // No profile row: the join yields nothing
        let other = repo
            .insert(&new_snippet(&bob, "Quicksort", &[], true))
            .await
            .unwrap();
        assert!(other.profiles.is_none());

        let fetched = repo.get_by_id(&created.snippet.id).await.unwrap();
        assert_eq!(fetched.snippet, created.snippet);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (_db, repo, _, _) = setup().await;
        assert!(matches!(
            repo.get_by_id("nope").await,
            Err(RepositoryError::NotFound(_))
        ));
        assert_eq!(repo.owner_of("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_newest_first_and_public_only() {
        let (_db, repo, alice, _) = setup().await;
        repo.insert(&new_snippet(&alice, "first", &[], true))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "hidden", &[], false))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "second", &[], true))
            .await
            .unwrap();

        let titles: Vec<String> = repo
            .list(&SnippetFilter::public())
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.snippet.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);

        let own = repo
            .list(&SnippetFilter::owned_by(alice.clone()))
            .await
            .unwrap();
        assert_eq!(own.len(), 3);
    }

    #[tokio::test]
    async fn test_list_tags_require_all() {
        let (_db, repo, alice, _) = setup().await;
        repo.insert(&new_snippet(&alice, "both", &["react", "hooks"], true))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "one", &["react"], true))
            .await
            .unwrap();

        let filter = SnippetFilter {
            tags: vec!["react".to_string(), "hooks".to_string()],
            ..SnippetFilter::default()
        };
        let hits = repo.list(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].snippet.title, "both");
    }

    #[tokio::test]
    async fn test_list_search_is_literal_and_case_insensitive() {
        let (_db, repo, alice, _) = setup().await;
        repo.insert(&new_snippet(&alice, "100% coverage", &[], true))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "1000 items", &[], true))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "snake_case helper", &[], true))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "snakeXcase helper", &[], true))
            .await
            .unwrap();

        let search = |text: &str| SnippetFilter {
            search: Some(text.to_string()),
            ..SnippetFilter::default()
        };

        let percent = repo.list(&search("100%")).await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].snippet.title, "100% coverage");

        let underscore = repo.list(&search("SNAKE_CASE")).await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].snippet.title, "snake_case helper");

        // Description is searched too
        let by_description = repo.list(&search("about 1000")).await.unwrap();
        assert_eq!(by_description.len(), 1);
    }

    #[tokio::test]
    async fn test_list_search_folds_non_ascii_case() {
        let (_db, repo, alice, _) = setup().await;
        repo.insert(&new_snippet(&alice, "Ärger mit Straße", &[], true))
            .await
            .unwrap();
        repo.insert(&new_snippet(&alice, "Plain", &[], true))
            .await
            .unwrap();

        let search = |text: &str| SnippetFilter {
            search: Some(text.to_string()),
            ..SnippetFilter::default()
        };

        for needle in ["Ärger", "ärger", "ÄRGER", "STRAßE"] {
            let hits = repo.list(&search(needle)).await.unwrap();
            assert_eq!(hits.len(), 1, "search {needle:?}");
            assert_eq!(hits[0].snippet.title, "Ärger mit Straße");
        }

        // Description fold covers non-ASCII too
        let by_description = repo.list(&search("ABOUT ÄRGER")).await.unwrap();
        assert_eq!(by_description.len(), 1);
    }

    #[tokio::test]
    async fn test_update_refreshes_search_folds() {
        let (_db, repo, alice, _) = setup().await;
        let created = repo
            .insert(&new_snippet(&alice, "Plain", &[], true))
            .await
            .unwrap();

        let update = SnippetUpdate {
            title: Some("Öffnen".to_string()),
            description: Some(None),
            ..SnippetUpdate::default()
        };
        repo.update(&created.snippet.id, &update).await.unwrap();

        let search = |text: &str| SnippetFilter {
            search: Some(text.to_string()),
            ..SnippetFilter::default()
        };
        assert_eq!(repo.list(&search("öffnen")).await.unwrap().len(), 1);
        assert!(repo.list(&search("plain")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_partial_and_clear_description() {
        let (_db, repo, alice, _) = setup().await;
        let created = repo
            .insert(&new_snippet(&alice, "old", &["a"], true))
            .await
            .unwrap();

        let update = SnippetUpdate {
            title: Some("new".to_string()),
            description: Some(None),
            is_public: Some(false),
            ..SnippetUpdate::default()
        };
        let updated = repo.update(&created.snippet.id, &update).await.unwrap();

        assert_eq!(updated.snippet.title, "new");
        assert_eq!(updated.snippet.description, None);
        assert!(!updated.snippet.is_public);
        assert_eq!(updated.snippet.code, created.snippet.code);
        assert_eq!(updated.snippet.tags, vec!["a"]);
        assert_eq!(updated.snippet.created_at, created.snippet.created_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let (_db, repo, _, _) = setup().await;
        let update = SnippetUpdate {
            title: Some("x".to_string()),
            ..SnippetUpdate::default()
        };
        assert!(matches!(
            repo.update("missing", &update).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete("missing").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let (_db, repo, alice, _) = setup().await;
        let created = repo
            .insert(&new_snippet(&alice, "gone", &[], true))
            .await
            .unwrap();

        repo.delete(&created.snippet.id).await.unwrap();
        assert_eq!(repo.owner_of(&created.snippet.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_unknown_owner_is_invalid_reference() {
        let (_db, repo, _, _) = setup().await;
        let result = repo
            .insert(&new_snippet(&UserId::new("ghost"), "x", &[], true))
            .await;
        assert!(matches!(result, Err(RepositoryError::InvalidReference(_))));
    }
}
