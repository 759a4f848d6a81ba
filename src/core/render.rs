use crate::core::markup;
use crate::domain::model::{CatalogItem, RenderedDocument, Thumbnail};
use regex::Regex;
use std::sync::LazyLock;

// The catalog only emits this closed set of structural tags in descriptions.
static DESCRIPTION_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(p|br) ?/?>").unwrap());

const ENGLISH_FLAG: &str = "\u{1F1EC}\u{1F1E7}";
const JAPAN_FLAG: &str = "\u{1F1EF}\u{1F1F5}";
const ZERO_WIDTH_JOINER: char = '\u{200D}';
const THUMBNAIL_MIME: &str = "image/jpeg";
const CROSS_REFERENCE_BASE: &str = "https://myanimelist.net/anime/";
const CATALOG_ITEM_BASE: &str = "https://anilist.co/anime/";

/// Escape `&`, `<` and `>`. Quotes stay bare: the output is inline rich text.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape for a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

/// Remove paragraph and line-break tags and unescape `&quot;` only.
pub fn sanitize_description(description: &str) -> String {
    DESCRIPTION_TAGS
        .replace_all(description, "")
        .replace("&quot;", "\"")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Assemble the markup body for one catalog item.
pub fn render_body(item: &CatalogItem) -> String {
    let title = &item.title;
    let mut body = String::new();

    // Invisible anchor so the chat client shows the cover as link preview.
    if let Some(image) = item.image_url() {
        body.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_attr(image),
            ZERO_WIDTH_JOINER
        ));
    }

    body.push_str(&format!("<b>{}</b>\n", escape_html(&title.romaji)));

    if let Some(english) = non_empty(title.english.as_deref()) {
        if english.to_lowercase() != title.romaji.to_lowercase() {
            body.push_str(&format!("{}<b>{}</b>\n", ENGLISH_FLAG, escape_html(english)));
        }
    }

    if let Some(native) = non_empty(title.native.as_deref()) {
        let flag = match item.country_of_origin.as_deref() {
            Some("JP") => JAPAN_FLAG,
            _ => "",
        };
        body.push_str(&format!("{}<b>{}</b>\n", flag, escape_html(native)));
    }

    // leading newline separates the titles from the details
    body.push_str(&format!(
        "\n<b>{}</b>: {} episodes (<b>aired</b>: {})\n",
        escape_html(&capitalize(item.format.as_deref().unwrap_or("?"))),
        or_unknown(item.episodes),
        or_unknown(item.season_year)
    ));
    body.push_str(&format!("<b>Score</b>: {}\n", or_unknown(item.mean_score)));

    if !item.genres.is_empty() {
        let genres: Vec<String> = item.genres.iter().map(|g| escape_html(g)).collect();
        body.push_str(&format!("<b>Genres</b>: {}\n", genres.join(", ")));
    }

    let description = sanitize_description(item.description.as_deref().unwrap_or(""));
    body.push_str(&format!("<b>Description</b>:\n{}", description));

    let site_url = item
        .site_url
        .clone()
        .unwrap_or_else(|| format!("{}{}", CATALOG_ITEM_BASE, item.id));
    body.push_str(&format!(
        "\n\n<a href=\"{}\">AniList</a>",
        escape_attr(&site_url)
    ));
    if let Some(id_mal) = item.id_mal {
        body.push_str(&format!(
            " | <a href=\"{}{}\">MAL</a>",
            CROSS_REFERENCE_BASE, id_mal
        ));
    }

    body
}

pub fn render_item(index: usize, item: &CatalogItem) -> RenderedDocument {
    let html = render_body(item);
    let rich = markup::parse(&html);

    RenderedDocument {
        id: index.to_string(),
        title: item.title.romaji.clone(),
        html,
        text: rich.text,
        annotations: rich.annotations,
        thumbnail: item.image_url().map(|url| Thumbnail {
            url: url.to_string(),
            mime_type: THUMBNAIL_MIME.to_string(),
        }),
    }
}

/// Render a page of items in order, then drop zero-length annotations,
/// which chat transports reject.
pub fn render_page(items: &[CatalogItem]) -> Vec<RenderedDocument> {
    let mut documents: Vec<RenderedDocument> = items
        .iter()
        .enumerate()
        .map(|(index, item)| render_item(index, item))
        .collect();

    for document in &mut documents {
        document.annotations.retain(|a| a.length > 0);
    }
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CoverImage, MediaTitle, StyleKind};

    fn sample_item() -> CatalogItem {
        CatalogItem {
            id: 66,
            site_url: Some("https://anilist.co/anime/66".to_string()),
            id_mal: Some(66),
            title: MediaTitle {
                romaji: "Azumanga Daioh".to_string(),
                english: Some("Azumanga Daioh: The Animation".to_string()),
                native: Some("あずまんが大王".to_string()),
            },
            cover_image: Some(CoverImage {
                large: Some("https://img.anili.st/66.jpg".to_string()),
            }),
            episodes: Some(26),
            season_year: Some(2002),
            description: Some("<p>Chiyo &quot;chan&quot; joins.</p><br>".to_string()),
            mean_score: Some(82),
            format: Some("TV".to_string()),
            country_of_origin: Some("JP".to_string()),
            genres: vec!["Comedy".to_string(), "Slice of Life".to_string()],
        }
    }

    #[test]
    fn test_sanitize_description() {
        assert_eq!(sanitize_description("<p>A</p><br/>B"), "AB");
        assert_eq!(sanitize_description("a<br>b<br />c</p >"), "abc");
        assert_eq!(
            sanitize_description("&quot;hi&quot; &amp; <i>bye</i>"),
            "\"hi\" &amp; <i>bye</i>"
        );
    }

    #[test]
    fn test_escape_html_leaves_quotes() {
        assert_eq!(escape_html("A & B"), "A &amp; B");
        assert_eq!(escape_html("<x> \"q\" 'a'"), "&lt;x&gt; \"q\" 'a'");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(
            escape_attr("https://x.example/a'b\"c&d"),
            "https://x.example/a'b&quot;c&amp;d"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("TV"), "Tv");
        assert_eq!(capitalize("TV_SHORT"), "Tv_short");
        assert_eq!(capitalize("movie"), "Movie");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_full_body_layout() {
        let body = render_body(&sample_item());
        let expected = "<a href=\"https://img.anili.st/66.jpg\">\u{200d}</a>\
<b>Azumanga Daioh</b>\n\
\u{1F1EC}\u{1F1E7}<b>Azumanga Daioh: The Animation</b>\n\
\u{1F1EF}\u{1F1F5}<b>あずまんが大王</b>\n\
\n<b>Tv</b>: 26 episodes (<b>aired</b>: 2002)\n\
<b>Score</b>: 82\n\
<b>Genres</b>: Comedy, Slice of Life\n\
<b>Description</b>:\nChiyo \"chan\" joins.\
\n\n<a href=\"https://anilist.co/anime/66\">AniList</a> | <a href=\"https://myanimelist.net/anime/66\">MAL</a>";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_english_line_only_when_different() {
        let mut item = sample_item();
        item.title.english = Some("AZUMANGA DAIOH".to_string());
        assert!(!render_body(&item).contains(ENGLISH_FLAG));

        item.title.english = None;
        assert!(!render_body(&item).contains(ENGLISH_FLAG));

        item.title.english = Some("Azumanga".to_string());
        assert!(render_body(&item).contains("\u{1F1EC}\u{1F1E7}<b>Azumanga</b>\n"));
    }

    #[test]
    fn test_native_flag_depends_on_origin() {
        let mut item = sample_item();
        item.country_of_origin = Some("CN".to_string());
        item.title.native = Some("一人之下".to_string());
        let body = render_body(&item);
        assert!(body.contains("\n<b>一人之下</b>\n"));
        assert!(!body.contains(JAPAN_FLAG));

        item.title.native = None;
        assert!(!render_body(&item).contains("一人之下"));
    }

    #[test]
    fn test_optional_lines_and_links() {
        let mut item = sample_item();
        item.genres.clear();
        item.id_mal = None;
        item.episodes = None;
        let body = render_body(&item);
        assert!(!body.contains("<b>Genres</b>"));
        assert!(!body.contains("MAL"));
        assert!(body.contains(": ? episodes"));
        assert!(body.ends_with(">AniList</a>"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let mut item = sample_item();
        item.title.romaji = "A & B <3".to_string();
        let document = render_item(0, &item);
        assert!(document.html.contains("<b>A &amp; B &lt;3</b>"));
        assert!(document.text.contains("A & B <3\n"));
        assert_eq!(document.title, "A & B <3");
    }

    #[test]
    fn test_rendered_document_annotations() {
        let document = render_item(3, &sample_item());
        assert_eq!(document.id, "3");
        assert!(document.text.starts_with("\u{200d}Azumanga Daioh\n"));
        assert_eq!(document.annotations[0].kind, StyleKind::TextLink);
        assert_eq!(document.annotations[0].offset, 0);
        assert_eq!(document.annotations[0].length, 1);
        assert_eq!(document.annotations[1].kind, StyleKind::Bold);
        assert_eq!(document.annotations[1].offset, 1);
        assert_eq!(document.annotations[1].length, 14);
        let thumbnail = document.thumbnail.unwrap();
        assert_eq!(thumbnail.url, "https://img.anili.st/66.jpg");
        assert_eq!(thumbnail.mime_type, "image/jpeg");
    }

    #[test]
    fn test_render_page_drops_zero_length_annotations() {
        let mut first = sample_item();
        first.description = Some("<b></b>empty bold".to_string());
        let mut last = sample_item();
        last.title.romaji = "Second".to_string();
        last.description = Some("<i></i><b>kept</b>".to_string());

        let documents = render_page(&[first, last]);

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].title, "Second");
        for document in &documents {
            assert!(document.annotations.iter().all(|a| a.length > 0));
        }
        assert!(documents[1]
            .annotations
            .iter()
            .any(|a| a.kind == StyleKind::Bold && a.length == 4));
    }

    #[test]
    fn test_named_entities_are_decoded() {
        let mut item = sample_item();
        item.description = Some("Caf&eacute; &mdash; &hellip; &rsquo;s<br>".to_string());
        let document = render_item(0, &item);
        assert!(document
            .text
            .contains("Description:\nCaf\u{e9} \u{2014} \u{2026} \u{2019}s\n\nAniList"));
        assert!(!document.text.contains("&mdash;"));
    }

    #[test]
    fn test_link_urls_with_quotes_stay_whole() {
        let mut item = sample_item();
        item.site_url = Some("https://anilist.co/anime/1/Kino's-Journey\"x".to_string());
        item.id_mal = None;
        let document = render_item(0, &item);
        let link = document.annotations.last().unwrap();
        assert_eq!(link.kind, StyleKind::TextLink);
        assert_eq!(
            link.url.as_deref(),
            Some("https://anilist.co/anime/1/Kino's-Journey\"x")
        );
        assert!(document.text.ends_with("AniList"));
    }

    #[test]
    fn test_render_page_empty() {
        assert!(render_page(&[]).is_empty());
    }
}
