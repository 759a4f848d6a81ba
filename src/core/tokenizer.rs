use crate::domain::model::ResolvedQuery;
use crate::domain::taxonomy::{Category, Taxonomy};

/// Splits the filter list from the free-text search.
pub const SEARCH_SEPARATOR: &str = ": ";
pub const FILTER_SEPARATOR: char = ',';

/// Resolve raw inline input into taxonomy filters and search text.
///
/// The part before the first `": "` is read as a comma-separated filter list.
/// When none of its tokens name a known genre or tag, the input was not a
/// filter list after all and the whole input (separators turned into spaces)
/// becomes the search text.
pub fn resolve(input: &str, taxonomy: &Taxonomy) -> ResolvedQuery {
    let (candidates, search) = input.split_once(SEARCH_SEPARATOR).unwrap_or((input, ""));

    let mut resolved = ResolvedQuery::default();
    for token in candidates.replace(", ", ",").split(FILTER_SEPARATOR) {
        let token = token.trim().to_lowercase();
        match taxonomy.classify(&token) {
            Some(Category::Genre) => {
                resolved.genres.insert(token);
            }
            Some(Category::Tag) => {
                resolved.tags.insert(token);
            }
            None => {}
        }
    }

    resolved.search = if resolved.has_filters() {
        search.to_string()
    } else {
        input
            .replace(SEARCH_SEPARATOR, " ")
            .replace(FILTER_SEPARATOR, " ")
    };

    tracing::trace!(
        genres = ?resolved.genres,
        tags = ?resolved.tags,
        search = %resolved.search,
        "resolved inline input"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> std::collections::BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_genre_with_search_text() {
        let resolved = resolve("romance: usagi", Taxonomy::global());
        assert_eq!(resolved.genres, set(&["romance"]));
        assert!(resolved.tags.is_empty());
        assert_eq!(resolved.search, "usagi");
    }

    #[test]
    fn test_plain_text_falls_back_to_search() {
        let resolved = resolve("lucky star", Taxonomy::global());
        assert!(!resolved.has_filters());
        assert_eq!(resolved.search, "lucky star");
    }

    #[test]
    fn test_filter_list_without_search_text() {
        let resolved = resolve("action, mecha", Taxonomy::global());
        assert_eq!(resolved.genres, set(&["action", "mecha"]));
        assert_eq!(resolved.search, "");
    }

    #[test]
    fn test_genres_and_tags_are_separated() {
        let resolved = resolve("Aliens,MECHA, 4-koma: space", Taxonomy::global());
        assert_eq!(resolved.genres, set(&["mecha"]));
        assert_eq!(resolved.tags, set(&["4-koma", "aliens"]));
        assert_eq!(resolved.search, "space");
    }

    #[test]
    fn test_unknown_tokens_are_ignored_when_some_match() {
        let resolved = resolve("romance, nonsense: april", Taxonomy::global());
        assert_eq!(resolved.genres, set(&["romance"]));
        assert!(resolved.tags.is_empty());
        assert_eq!(resolved.search, "april");
    }

    #[test]
    fn test_all_miss_prefix_becomes_search_text() {
        let resolved = resolve("your lie, in: april", Taxonomy::global());
        assert!(!resolved.has_filters());
        assert_eq!(resolved.search, "your lie  in april");
    }

    #[test]
    fn test_only_first_separator_splits() {
        let resolved = resolve("drama: re: zero", Taxonomy::global());
        assert_eq!(resolved.genres, set(&["drama"]));
        assert_eq!(resolved.search, "re: zero");
    }

    #[test]
    fn test_no_substring_matching() {
        // "opera" is only part of the "space opera" tag
        let resolved = resolve("opera: ghost", Taxonomy::global());
        assert!(!resolved.has_filters());
        assert_eq!(resolved.search, "opera ghost");
    }

    #[test]
    fn test_empty_input() {
        let resolved = resolve("", Taxonomy::global());
        assert_eq!(resolved, ResolvedQuery::default());
    }
}
