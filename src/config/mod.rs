#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliCommand, CliConfig, StdoutSink};
pub use toml_config::BotConfig;
