//! Static table of trigger patterns. The first entry whose pattern matches
//! at the start of the input handles it.

use crate::core::help;
use crate::core::search::{deliver, InlineSearch, Outcome};
use crate::domain::model::{CommandReply, InlineQuery};
use crate::domain::ports::{AnswerSink, CatalogSource};
use crate::domain::taxonomy::{Category, Taxonomy};
use regex::{Captures, Regex};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    InlineHelp,
    InlineSearch,
    StartHelp,
    TagsGenres,
}

#[derive(Debug)]
pub struct Trigger {
    pub pattern: &'static str,
    pub route: Route,
}

pub const INLINE_TRIGGERS: &[Trigger] = &[
    Trigger {
        pattern: r"^$",
        route: Route::InlineHelp,
    },
    Trigger {
        pattern: r"(?i)(.+)",
        route: Route::InlineSearch,
    },
];

pub const COMMAND_TRIGGERS: &[Trigger] = &[
    Trigger {
        pattern: r"(?i)/(start|help) ?(.+)?",
        route: Route::StartHelp,
    },
    Trigger {
        pattern: r"(?i)/(tag|genre)s?",
        route: Route::TagsGenres,
    },
];

struct CompiledTable(Vec<(Regex, Route)>);

impl CompiledTable {
    fn compile(triggers: &[Trigger]) -> Self {
        Self(
            triggers
                .iter()
                .map(|t| {
                    let anchored = format!("^(?:{})", t.pattern);
                    (Regex::new(&anchored).unwrap(), t.route)
                })
                .collect(),
        )
    }

    fn find<'t>(&self, text: &'t str) -> Option<(Route, Captures<'t>)> {
        self.0
            .iter()
            .find_map(|(regex, route)| regex.captures(text).map(|caps| (*route, caps)))
    }
}

static INLINE_TABLE: LazyLock<CompiledTable> =
    LazyLock::new(|| CompiledTable::compile(INLINE_TRIGGERS));
static COMMAND_TABLE: LazyLock<CompiledTable> =
    LazyLock::new(|| CompiledTable::compile(COMMAND_TRIGGERS));

pub fn match_inline(text: &str) -> Option<(Route, Captures<'_>)> {
    INLINE_TABLE.find(text)
}

pub fn match_command(text: &str) -> Option<(Route, Captures<'_>)> {
    COMMAND_TABLE.find(text)
}

/// Entry point for everything the chat transport forwards.
pub struct Dispatcher<S: CatalogSource> {
    search: InlineSearch<S>,
    bot_username: String,
}

impl<S: CatalogSource> Dispatcher<S> {
    pub fn new(search: InlineSearch<S>, bot_username: impl Into<String>) -> Self {
        Self {
            search,
            bot_username: bot_username.into(),
        }
    }

    /// Returns `None` when no trigger matches the query text.
    pub async fn on_inline<A: AnswerSink>(&self, query: &InlineQuery, sink: &A) -> Option<Outcome> {
        let (route, caps) = match_inline(&query.text)?;
        match route {
            Route::InlineHelp => {
                let answer = help::inline_help(self.search.cache_time());
                Some(deliver(&query.id, &answer, sink).await)
            }
            Route::InlineSearch => {
                let matched = InlineQuery {
                    text: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                    ..query.clone()
                };
                Some(self.search.answer(&matched, sink).await)
            }
            Route::StartHelp | Route::TagsGenres => None,
        }
    }

    pub fn on_command(&self, text: &str) -> Option<CommandReply> {
        let (route, caps) = match_command(text)?;
        match route {
            Route::StartHelp => {
                let command = caps.get(1).map_or("", |m| m.as_str());
                // the pattern is case-insensitive, the greeting is not: "/START" gets usage
                if command == "start" && caps.get(2).is_none() {
                    Some(help::start_reply(&self.bot_username))
                } else {
                    Some(help::usage_reply(&self.bot_username))
                }
            }
            Route::TagsGenres => {
                let category = match caps.get(1)?.as_str() {
                    "tag" => Category::Tag,
                    "genre" => Category::Genre,
                    _ => return None,
                };
                Some(help::listing_reply(Taxonomy::global(), category))
            }
            Route::InlineHelp | Route::InlineSearch => None,
        }
    }
}
