use crate::domain::model::{CatalogItem, CatalogPage};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";

// Every level may be missing or null; any gap reads as an empty page.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    data: Option<PageData>,
    errors: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct PageData {
    #[serde(rename = "Page")]
    page: Option<PageBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageBody {
    page_info: Option<PageInfo>,
    media: Option<Vec<CatalogItem>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: Option<bool>,
}

/// GraphQL client for the media catalog.
///
/// Holds one `reqwest::Client`, so clones share a connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self::new(client, config.api_endpoint()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, request: &Value) -> Result<CatalogPage> {
        tracing::debug!("Making catalog request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            tracing::warn!("Catalog answered {}, reading body anyway", status);
        }

        let body = response.bytes().await?;
        parse_page(&body)
    }
}

/// Parse a response body. Only malformed JSON or mistyped fields are errors.
pub fn parse_page(body: &[u8]) -> Result<CatalogPage> {
    let envelope: Option<Envelope> = serde_json::from_slice(body)?;
    let envelope = envelope.unwrap_or_default();

    if let Some(errors) = envelope.errors.as_ref().filter(|e| !e.is_empty()) {
        tracing::warn!("Catalog reported {} error(s): {:?}", errors.len(), errors);
    }

    let Some(page) = envelope.data.and_then(|d| d.page) else {
        return Ok(CatalogPage::default());
    };

    let has_next = page
        .page_info
        .and_then(|info| info.has_next_page)
        .unwrap_or(false);

    Ok(CatalogPage {
        items: page.media.unwrap_or_default(),
        has_next,
    })
}
