use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Filters and free text extracted from one inline query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub genres: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub search: String,
}

impl ResolvedQuery {
    pub fn has_filters(&self) -> bool {
        !self.genres.is_empty() || !self.tags.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

/// Position of a page within a result set. Derived from the offset alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: u64,
    pub has_next: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaTitle {
    pub romaji: String,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
}

/// One media record as returned by the catalog API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default)]
    pub id: u64,
    pub site_url: Option<String>,
    pub id_mal: Option<u64>,
    pub title: MediaTitle,
    pub cover_image: Option<CoverImage>,
    pub episodes: Option<u32>,
    pub season_year: Option<i32>,
    pub description: Option<String>,
    pub mean_score: Option<u32>,
    pub format: Option<String>,
    pub country_of_origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogItem {
    pub fn image_url(&self) -> Option<&str> {
        self.cover_image.as_ref().and_then(|c| c.large.as_deref())
    }
}

/// One page of catalog results; an absent page parses to `CatalogPage::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    TextLink,
}

/// Formatting span over the plain text. Offsets count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleAnnotation {
    pub kind: StyleKind,
    pub offset: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub id: String,
    pub title: String,
    /// Markup as assembled by the renderer.
    pub html: String,
    /// `html` with markup removed; annotations index into this.
    pub text: String,
    pub annotations: Vec<StyleAnnotation>,
    pub thumbnail: Option<Thumbnail>,
}

/// Inbound inline query as handed over by the chat transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineQuery {
    pub id: String,
    pub text: String,
    pub offset: Option<String>,
}

/// Help entry shown when the inline query is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpArticle {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineAnswer {
    pub results: Vec<RenderedDocument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<HelpArticle>,
    pub next_offset: Option<String>,
    pub cache_time: u32,
    /// Payload for the "switch to private chat" button, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm: Option<SwitchButton>,
}

impl InlineAnswer {
    pub fn empty(cache_time: u32) -> Self {
        Self {
            cache_time,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchButton {
    pub text: String,
    pub parameter: String,
}

/// Reply to a chat command such as `/help`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReply {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline: Option<SwitchButton>,
}
