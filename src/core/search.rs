use crate::core::cursor::{decode_offset, page_for, RESULTS_PER_QUERY};
use crate::core::query::build_request;
use crate::core::render::render_page;
use crate::core::tokenizer;
use crate::domain::model::{Cursor, InlineAnswer, InlineQuery};
use crate::domain::ports::{AnswerSink, CatalogSource};
use crate::domain::taxonomy::Taxonomy;
use crate::utils::error::{DeliveryError, Result};

/// What became of one inline answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    /// The query went stale upstream; nothing to report.
    Expired,
    Failed(DeliveryError),
}

/// Runs one inline query through tokenizer, catalog and renderer.
///
/// Holds no per-request state, so a single instance serves concurrent
/// queries.
pub struct InlineSearch<S: CatalogSource> {
    source: S,
    taxonomy: &'static Taxonomy,
    cache_time: u32,
}

impl<S: CatalogSource> InlineSearch<S> {
    pub fn new(source: S, cache_time: u32) -> Self {
        Self {
            source,
            taxonomy: Taxonomy::global(),
            cache_time,
        }
    }

    pub fn cache_time(&self) -> u32 {
        self.cache_time
    }

    pub async fn search(&self, query: &InlineQuery) -> Result<InlineAnswer> {
        let offset = decode_offset(query.offset.as_deref());
        let resolved = tokenizer::resolve(&query.text, self.taxonomy);

        tracing::debug!(
            "Inline query {} (offset={}): genres={:?} tags={:?} search={:?}",
            query.id,
            offset,
            resolved.genres,
            resolved.tags,
            resolved.search
        );

        let request = build_request(&resolved, page_for(offset, RESULTS_PER_QUERY));
        let page = self.source.fetch_page(&request).await?;

        let cursor = Cursor {
            offset,
            has_next: page.has_next,
        };
        let results = render_page(&page.items);
        let next_offset = if results.is_empty() {
            None
        } else {
            cursor.next_token(RESULTS_PER_QUERY)
        };

        tracing::debug!("Inline query {}: Processed {} results", query.id, results.len());

        Ok(InlineAnswer {
            results,
            next_offset,
            cache_time: self.cache_time,
            ..InlineAnswer::default()
        })
    }

    /// Search and deliver. A failed catalog call still answers, with an
    /// empty result list, since inline answers have no error channel.
    pub async fn answer<A: AnswerSink>(&self, query: &InlineQuery, sink: &A) -> Outcome {
        let answer = match self.search(query).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("Inline query {}: catalog lookup failed: {}", query.id, e);
                InlineAnswer::empty(self.cache_time)
            }
        };
        deliver(&query.id, &answer, sink).await
    }
}

pub async fn deliver<A: AnswerSink>(query_id: &str, answer: &InlineAnswer, sink: &A) -> Outcome {
    match sink.answer(query_id, answer).await {
        Ok(()) => {
            tracing::debug!("Inline query {}: Complete", query_id);
            Outcome::Delivered
        }
        Err(DeliveryError::QueryExpired) => Outcome::Expired,
        Err(e) => {
            tracing::warn!("Inline query {}: Sending results failed: {}", query_id, e);
            Outcome::Failed(e)
        }
    }
}
