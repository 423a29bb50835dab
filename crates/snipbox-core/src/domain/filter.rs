//! Filter composition for snippet listings.
//!
//! Query parameters are parsed once into a [`SnippetFilter`]; storage
//! adapters translate that structure into their own query dialect. The
//! only escaping rule lives in [`escape_like`].

use serde::{Deserialize, Serialize};

use super::snippet::UserId;

/// Escape character used with `LIKE ... ESCAPE`.
pub const LIKE_ESCAPE: char = '\\';

/// Raw list query parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    pub user_id: Option<String>,
    pub language: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub search: Option<String>,
}

/// Structured filter specification for listing snippets.
///
/// - `owner: Some(_)` restricts to that owner's snippets with no visibility
///   filter; `None` restricts to public snippets.
/// - `language` is an exact, case-sensitive match.
/// - `tags` uses containment: every listed tag must be present.
/// - `search` is a case-insensitive literal substring of title or description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    pub owner: Option<UserId>,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub search: Option<String>,
}

impl SnippetFilter {
    /// Build a filter from query parameters. Empty values count as absent.
    pub fn from_params(params: &ListParams) -> Self {
        let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

        Self {
            owner: non_empty(&params.user_id).map(UserId::from),
            language: non_empty(&params.language),
            tags: params.tags.as_deref().map(parse_tags).unwrap_or_default(),
            search: non_empty(&params.search),
        }
    }

    /// Filter for all public snippets.
    pub fn public() -> Self {
        Self::default()
    }

    /// Filter for one owner's snippets.
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ..Self::default()
        }
    }

    pub const fn public_only(&self) -> bool {
        self.owner.is_none()
    }

    /// `LIKE` pattern for the search text, case-folded with wildcards escaped.
    ///
    /// Adapters compare it against text passed through [`fold_case`].
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| format!("%{}%", escape_like(&fold_case(s))))
    }
}

impl ListParams {
    /// Build parameters from decoded query pairs.
    ///
    /// The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "user_id" => &mut params.user_id,
                "language" => &mut params.language,
                "tags" => &mut params.tags,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Unicode lowercase form used for case-insensitive search.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Split a comma-separated tag list, trimming each entry and dropping empties.
pub fn parse_tags(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Escape `LIKE` metacharacters so `input` matches literally.
///
/// The escape character itself is escaped first.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(parse_tags(" react , hooks,,"), vec!["react", "hooks"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_from_params() {
        let params = ListParams {
            user_id: Some(String::new()),
            language: Some("Python".to_string()),
            tags: Some("a, b".to_string()),
            search: Some("100%".to_string()),
        };
        let filter = SnippetFilter::from_params(&params);

        assert!(filter.public_only());
        assert_eq!(filter.language.as_deref(), Some("Python"));
        assert_eq!(filter.tags, vec!["a", "b"]);
        assert_eq!(filter.search_pattern().as_deref(), Some("%100\\%%"));
    }

    #[test]
    fn test_search_pattern_folds_unicode_case() {
        let filter = SnippetFilter {
            search: Some("ÄRGER_1".to_string()),
            ..SnippetFilter::public()
        };
        assert_eq!(filter.search_pattern().as_deref(), Some("%ärger\\_1%"));
        assert_eq!(fold_case("Ärger mit Straße"), "ärger mit straße");
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let pairs = [
            ("language", "Rust"),
            ("language", "Go"),
            ("page", "2"),
            ("search", ""),
            ("search", "ignored"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));
        let params = ListParams::from_pairs(pairs);

        assert_eq!(params.language.as_deref(), Some("Rust"));
        assert_eq!(params.search.as_deref(), Some(""));
        assert!(params.user_id.is_none());
        assert!(params.tags.is_none());

        let filter = SnippetFilter::from_params(&params);
        assert_eq!(filter.language.as_deref(), Some("Rust"));
        assert!(filter.search.is_none());
    }
}
