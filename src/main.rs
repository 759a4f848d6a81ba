use clap::Parser;
use inline_anime::core::ConfigProvider;
use inline_anime::domain::model::InlineQuery;
use inline_anime::utils::{logger, validation::Validate};
use inline_anime::{
    BotConfig, CatalogClient, CliCommand, CliConfig, Dispatcher, InlineSearch, Outcome,
    StdoutSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = BotConfig::from_file_or_default(&cli.config)?;

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.logging.json {
        logger::init_json_logger(level, cli.verbose);
    } else {
        logger::init_cli_logger(level, cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // One client for the whole process; every query reuses its connections.
    let client = CatalogClient::from_config(&config)?;
    tracing::info!("Using catalog endpoint {}", client.endpoint());

    let search = InlineSearch::new(client, config.cache_time());
    let dispatcher = Dispatcher::new(search, config.inline.bot_username.clone());

    match cli.command {
        CliCommand::Query { text, offset, id } => {
            let query = InlineQuery { id, text, offset };
            let sink = StdoutSink { pretty: true };
            match dispatcher.on_inline(&query, &sink).await {
                Some(Outcome::Delivered) | Some(Outcome::Expired) => {}
                Some(Outcome::Failed(e)) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
                None => {
                    eprintln!("No inline handler matches {:?}", query.text);
                    std::process::exit(1);
                }
            }
        }
        CliCommand::Command { text } => match dispatcher.on_command(&text) {
            Some(reply) => println!("{}", serde_json::to_string_pretty(&reply)?),
            None => {
                eprintln!("Unknown command {:?}", text);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
