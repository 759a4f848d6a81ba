use crate::domain::model::{CatalogPage, InlineAnswer};
use crate::utils::error::{DeliveryError, Result};
use async_trait::async_trait;
use serde_json::Value;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn cache_time(&self) -> u32;
}

/// Remote catalog that answers one structured request per call.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, request: &Value) -> Result<CatalogPage>;
}

/// The chat transport's answer channel.
#[async_trait]
pub trait AnswerSink: Send + Sync {
    async fn answer(
        &self,
        query_id: &str,
        answer: &InlineAnswer,
    ) -> std::result::Result<(), DeliveryError>;
}
