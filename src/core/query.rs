use crate::domain::model::{PageRequest, ResolvedQuery};
use serde_json::{json, Map, Value};

/// Media kind sent with every request.
pub const MEDIA_TYPE: &str = "ANIME";

pub const MEDIA_QUERY: &str = r#"
query ($id: Int, $page: Int, $perPage: Int, $search: String, $genres: [String], $tags: [String], $type: MediaType) {
    Page (page: $page, perPage: $perPage) {
        pageInfo {
            total
            currentPage
            lastPage
            hasNextPage
            perPage
        }
        media (id: $id, search: $search, genre_in: $genres, type: $type, tag_in: $tags) {
            id, siteUrl, idMal,
            title {
                romaji, english, native
            },
            coverImage {
                large
            },
            episodes, seasonYear, description(asHtml: true), meanScore, format, countryOfOrigin, genres
        }
    }
}"#;

/// Build the `{query, variables}` request body.
///
/// Empty values are left out of `variables` entirely: the catalog reads a
/// missing filter as "no constraint" but an empty one as "match nothing".
pub fn build_request(resolved: &ResolvedQuery, page: PageRequest) -> Value {
    let mut variables = Map::new();
    variables.insert("page".to_string(), json!(page.page));
    variables.insert("perPage".to_string(), json!(page.per_page));
    variables.insert("type".to_string(), json!(MEDIA_TYPE));
    variables.insert("search".to_string(), json!(resolved.search));
    variables.insert("genres".to_string(), json!(resolved.genres));
    variables.insert("tags".to_string(), json!(resolved.tags));

    variables.retain(|_, value| !is_empty_value(value));

    json!({
        "query": MEDIA_QUERY,
        "variables": variables,
    })
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
