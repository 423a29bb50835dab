//! Interactive listing filter.
//!
//! Browsing clients fetch the public snippet set once and then narrow it
//! locally as the user types. This is looser than [`SnippetFilter`]:
//! the search text also matches tags.
//!
//! [`SnippetFilter`]: crate::domain::SnippetFilter

use crate::domain::SnippetRecord;

/// Language selector for the listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LanguageChoice {
    /// No language restriction.
    #[default]
    All,
    /// Exact language label.
    Only(String),
}

impl LanguageChoice {
    /// `"all"` (any case) or an empty value selects every language.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    fn accepts(&self, language: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == language,
        }
    }
}

/// Client-side listing query.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub search: String,
    pub language: LanguageChoice,
}

impl ListingQuery {
    /// Whether `record` passes the search and language selectors.
    pub fn matches(&self, record: &SnippetRecord) -> bool {
        let snippet = &record.snippet;
        let needle = self.search.to_lowercase();

        let matches_search = snippet.title.to_lowercase().contains(&needle)
            || snippet
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
            || snippet
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle));

        matches_search && self.language.accepts(&snippet.language)
    }
}

/// Narrow `records` with `query`, preserving order.
pub fn filter_listing<'a>(
    records: &'a [SnippetRecord],
    query: &ListingQuery,
) -> Vec<&'a SnippetRecord> {
    records.iter().filter(|r| query.matches(r)).collect()
}

/// Distinct languages in first-seen order, for building a language picker.
pub fn distinct_languages(records: &[SnippetRecord]) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for record in records {
        if !languages.contains(&record.snippet.language) {
            languages.push(record.snippet.language.clone());
        }
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Snippet, UserId};
    use chrono::Utc;

    fn record(title: &str, language: &str, tags: &[&str]) -> SnippetRecord {
        SnippetRecord {
            snippet: Snippet {
                id: title.to_string(),
                title: title.to_string(),
                description: Some("handy helper".to_string()),
                code: "x".to_string(),
                language: language.to_string(),
                tags: tags.iter().map(|t| (*t).to_string()).collect(),
                is_public: true,
                user_id: UserId::new("alice"),
                created_at: Utc::now(),
            },
            profiles: None,
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let records = vec![record("a", "Rust", &[]), record("b", "Go", &[])];
        assert_eq!(filter_listing(&records, &ListingQuery::default()).len(), 2);
    }

    #[test]
    fn test_search_covers_tags() {
        let records = vec![
            record("Debounce", "JavaScript", &["React", "hooks"]),
            record("Quicksort", "Rust", &["algorithms"]),
        ];
        let query = ListingQuery {
            search: "react".to_string(),
            ..Default::default()
        };

        let hits = filter_listing(&records, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].snippet.title, "Debounce");
    }

    #[test]
    fn test_language_selector() {
        let records = vec![record("a", "Rust", &[]), record("b", "Go", &[])];
        let query = ListingQuery {
            language: LanguageChoice::parse("Go"),
            ..Default::default()
        };
        let hits = filter_listing(&records, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].snippet.language, "Go");

        assert_eq!(LanguageChoice::parse("ALL"), LanguageChoice::All);
    }

    #[test]
    fn test_distinct_languages_first_seen_order() {
        let records = vec![
            record("a", "Rust", &[]),
            record("b", "Go", &[]),
            record("c", "Rust", &[]),
        ];
        assert_eq!(distinct_languages(&records), vec!["Rust", "Go"]);
    }
}
