pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig, StdoutSink};

pub use config::BotConfig;
pub use crate::core::{
    client::CatalogClient,
    dispatch::Dispatcher,
    search::{InlineSearch, Outcome},
};
pub use utils::error::{BotError, DeliveryError, Result};
