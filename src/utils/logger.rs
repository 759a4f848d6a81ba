use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter_for(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, level) {
            (true, _) => "inline_anime=debug,info".to_string(),
            (false, Some(level)) => format!("inline_anime={}", level),
            (false, None) => "inline_anime=info".to_string(),
        };
        EnvFilter::new(directive)
    })
}

pub fn init_cli_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one object per line for container log collectors
        )
        .init();
}
