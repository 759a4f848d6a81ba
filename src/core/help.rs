use crate::core::render::escape_html;
use crate::domain::model::{CommandReply, HelpArticle, InlineAnswer, SwitchButton};
use crate::domain::taxonomy::{Category, Taxonomy};

/// Query pre-filled by the "try inline mode" button.
pub const TRY_INLINE_QUERY: &str = "Amagami SS";

fn article(title: &str, description: &str) -> HelpArticle {
    HelpArticle {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Answer for an empty inline query: worked examples instead of results.
pub fn inline_help(cache_time: u32) -> InlineAnswer {
    InlineAnswer {
        help: vec![
            article("Simple search", "lucky star"),
            article("Search with genre/tag", "romance: usagi"),
            article("Multiple genres/tags", "action, mecha"),
            article(
                "Supported tags/genres",
                "Use the button above for a list of supported tags/genres",
            ),
        ],
        cache_time,
        switch_pm: Some(SwitchButton {
            text: "Tap here for more help".to_string(),
            parameter: "help".to_string(),
        }),
        ..InlineAnswer::default()
    }
}

pub fn start_reply(bot_username: &str) -> CommandReply {
    CommandReply {
        html: format!(
            "Hello! I am meant to be used in inline mode.\n\
             If you are not sure what that means, try typing <code>@{}</code> and a space or use the button below.\n\
             You can also tap /help for more info on how to use me",
            escape_html(bot_username)
        ),
        switch_inline: Some(SwitchButton {
            text: "Try out inline mode".to_string(),
            parameter: TRY_INLINE_QUERY.to_string(),
        }),
    }
}

pub fn usage_reply(bot_username: &str) -> CommandReply {
    let bot = escape_html(bot_username);
    CommandReply {
        html: format!(
            "Inline mode usage:\n\
             @{bot} [comma-separated list of genres or tags][: ][search query]\n\
             Examples:\n\
             - Search for more than one tag or genre:\n   @{bot} aliens, mecha\n\
             - Search for a tag and some text:\n   @{bot} romance: april\n\
             - Search without genres or tags:\n   @{bot} your lie in april\n\n\
             Supported tags: tap this -> /tags\n\
             Supported genres: tap this -> /genres"
        ),
        switch_inline: None,
    }
}

/// Supported names of one category, one bold heading per first character.
pub fn listing_reply(taxonomy: &Taxonomy, category: Category) -> CommandReply {
    let content: Vec<String> = taxonomy
        .grouped(category)
        .into_iter()
        .map(|(first, names)| {
            let names: Vec<String> = names.iter().map(|n| escape_html(n)).collect();
            format!(
                "<b>{}</b>:\n{}",
                first.to_uppercase(),
                names.join(", ")
            )
        })
        .collect();

    CommandReply {
        html: format!("Supported {}s:\n{}", category.name(), content.join("\n")),
        switch_inline: None,
    }
}
