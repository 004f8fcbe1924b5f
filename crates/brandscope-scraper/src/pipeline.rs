//! End-to-end insight collection for one store plus its competitors.

use brandscope_core::{BrandRecord, InsightSink};
use serde::Serialize;
use thiserror::Error;

use crate::client::{brand_name_from_url, StorefrontClient};
use crate::discovery::{collect_competitor_insights, DiscoverySettings};
use crate::search::SearchClient;

#[derive(Debug, Error)]
pub enum PipelineError<E: std::error::Error + 'static> {
    /// The store returned no usable catalog; nothing was persisted.
    #[error("no products found at {url}")]
    NoCatalog { url: String },

    #[error("failed to persist brand insights: {0}")]
    Persist(#[source] E),
}

/// Records produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub brand_insights: Vec<BrandRecord>,
    pub competitor_insights: Vec<BrandRecord>,
}

/// Scrapes `store_url`, persists the record, then scrapes and persists its
/// competitors when discovery is enabled.
///
/// # Errors
///
/// - [`PipelineError::NoCatalog`] when the store's catalog is empty or
///   unreachable.
/// - [`PipelineError::Persist`] when the sink rejects the brand record.
///
/// Competitor failures never surface here.
pub async fn collect_brand_insights<S: InsightSink>(
    client: &StorefrontClient,
    search: &SearchClient,
    sink: &S,
    store_url: &str,
    settings: &DiscoverySettings,
) -> Result<InsightsReport, PipelineError<S::Error>> {
    let record = client.fetch_all(store_url).await;
    if !record.has_catalog() {
        return Err(PipelineError::NoCatalog {
            url: store_url.to_owned(),
        });
    }

    sink.save(&record).await.map_err(PipelineError::Persist)?;

    let competitor_insights = if settings.enabled {
        let brand = brand_name_from_url(store_url);
        collect_competitor_insights(client, search, sink, &brand, settings).await
    } else {
        Vec::new()
    };

    tracing::info!(
        store = store_url,
        competitors = competitor_insights.len(),
        "brand insights collected"
    );

    Ok(InsightsReport {
        brand_insights: vec![record],
        competitor_insights,
    })
}
