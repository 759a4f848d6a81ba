use inline_anime::domain::model::CatalogPage;
use inline_anime::core::CatalogSource;
use inline_anime::{Dispatcher, InlineSearch, Result};

struct NoCatalog;

#[async_trait::async_trait]
impl CatalogSource for NoCatalog {
    async fn fetch_page(&self, _request: &serde_json::Value) -> Result<CatalogPage> {
        Ok(CatalogPage::default())
    }
}

fn dispatcher() -> Dispatcher<NoCatalog> {
    Dispatcher::new(InlineSearch::new(NoCatalog, 300), "theanimebot")
}

#[test]
fn test_start_without_args_greets() {
    let reply = dispatcher().on_command("/start").unwrap();
    assert!(reply.html.starts_with("Hello! I am meant to be used in inline mode."));
    let button = reply.switch_inline.unwrap();
    assert_eq!(button.text, "Try out inline mode");
    assert_eq!(button.parameter, "Amagami SS");
}

#[test]
fn test_start_with_payload_and_help_show_usage() {
    for command in ["/start help", "/help", "/HELP", "/START"] {
        let reply = dispatcher().on_command(command).unwrap();
        assert!(
            reply.html.starts_with("Inline mode usage:\n@theanimebot"),
            "command: {}",
            command
        );
        assert!(reply.switch_inline.is_none());
    }
}

#[test]
fn test_tag_and_genre_listings() {
    let tags = dispatcher().on_command("/tags").unwrap();
    assert!(tags.html.starts_with("Supported tags:\n<b>4</b>:\n4-koma\n<b>A</b>:\n"));
    assert!(tags.html.contains("boys' love"));

    let genres = dispatcher().on_command("/genre").unwrap();
    assert!(genres.html.starts_with("Supported genres:\n"));
    assert!(genres.html.contains("mahou shoujo, mecha, music, mystery"));
}

#[test]
fn test_listing_keys_are_case_sensitive() {
    assert!(dispatcher().on_command("/TAGS").is_none());
    assert!(dispatcher().on_command("/Genres").is_none());
    assert!(dispatcher().on_command("/tags").is_some());
}

#[test]
fn test_unknown_commands_are_ignored() {
    assert!(dispatcher().on_command("/settings").is_none());
    assert!(dispatcher().on_command("lucky star").is_none());
}

struct Discard;

#[async_trait::async_trait]
impl inline_anime::core::AnswerSink for Discard {
    async fn answer(
        &self,
        _query_id: &str,
        _answer: &inline_anime::domain::model::InlineAnswer,
    ) -> std::result::Result<(), inline_anime::DeliveryError> {
        Err(inline_anime::DeliveryError::QueryExpired)
    }
}

#[test]
fn test_stale_inline_help_is_swallowed() {
    let query = inline_anime::domain::model::InlineQuery::default();
    let outcome = tokio_test::block_on(dispatcher().on_inline(&query, &Discard));
    assert_eq!(outcome, Some(inline_anime::Outcome::Expired));
}
