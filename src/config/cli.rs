use crate::core::AnswerSink;
use crate::domain::model::InlineAnswer;
use crate::utils::error::DeliveryError;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "inline-anime")]
#[command(about = "Inline anime search: resolve a query, fetch the catalog, render results")]
pub struct CliConfig {
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Answer an inline query and print the answer as JSON
    Query {
        /// Raw query text, e.g. "romance: usagi"
        #[arg(default_value = "")]
        text: String,

        /// Pagination cursor from a previous answer
        #[arg(long)]
        offset: Option<String>,

        #[arg(long, default_value = "cli")]
        id: String,
    },
    /// Run a chat command such as /help or /tags
    Command { text: String },
}

/// Prints answers to stdout instead of handing them to a chat transport.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink {
    pub pretty: bool,
}

#[async_trait]
impl AnswerSink for StdoutSink {
    async fn answer(
        &self,
        query_id: &str,
        answer: &InlineAnswer,
    ) -> std::result::Result<(), DeliveryError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(answer)
        } else {
            serde_json::to_string(answer)
        }
        .map_err(|e| DeliveryError::Rejected(e.to_string()))?;

        tracing::debug!("Writing answer for query {} ({} bytes)", query_id, json.len());
        println!("{}", json);
        Ok(())
    }
}
