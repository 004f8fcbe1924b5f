//! Competitor discovery: search for sibling stores on the same platform and
//! scrape the ones that answer with a catalog.

use brandscope_core::{BrandRecord, InsightSink};

use crate::client::StorefrontClient;
use crate::search::SearchClient;

pub const DEFAULT_PLATFORM_MARKER: &str = "myshopify.com";
pub const DEFAULT_COMPETITOR_RESULTS: usize = 3;

/// Knobs for competitor discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    /// Maximum number of search results to consider.
    pub results: usize,
    /// Substring a result URL must contain to count as a competitor store.
    pub platform_marker: String,
    /// When `false`, the pipeline skips discovery entirely.
    pub enabled: bool,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            results: DEFAULT_COMPETITOR_RESULTS,
            platform_marker: DEFAULT_PLATFORM_MARKER.to_owned(),
            enabled: true,
        }
    }
}

impl DiscoverySettings {
    #[must_use]
    pub fn from_app_config(config: &brandscope_core::AppConfig) -> Self {
        Self {
            results: config.competitor_results,
            platform_marker: config.platform_marker.clone(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Result of a competitor search. A failed search is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    Found(Vec<String>),
    SearchFailed { reason: String },
}

impl DiscoveryOutcome {
    /// Competitor URLs, empty when the search failed.
    #[must_use]
    pub fn into_urls(self) -> Vec<String> {
        match self {
            Self::Found(urls) => urls,
            Self::SearchFailed { .. } => Vec::new(),
        }
    }
}

/// Searches for competitor storefronts of `brand_name`.
///
/// Results that do not contain `platform_marker` are discarded. Search
/// failures are logged at `warn` and returned as
/// [`DiscoveryOutcome::SearchFailed`].
pub async fn find_competitors(
    search: &SearchClient,
    brand_name: &str,
    limit: usize,
    platform_marker: &str,
) -> DiscoveryOutcome {
    let query = format!("{brand_name} competitors site:*.{platform_marker}");
    match search.search(&query, limit).await {
        Ok(links) => {
            let total = links.len();
            let urls: Vec<String> = links
                .into_iter()
                .filter(|link| link.contains(platform_marker))
                .collect();
            tracing::debug!(
                brand = brand_name,
                results = total,
                competitors = urls.len(),
                "competitor search finished"
            );
            DiscoveryOutcome::Found(urls)
        }
        Err(e) => {
            tracing::warn!(brand = brand_name, error = %e, "competitor search failed");
            DiscoveryOutcome::SearchFailed {
                reason: e.to_string(),
            }
        }
    }
}

/// Discovers competitors of `brand_name`, scrapes each, and persists the
/// ones with a non-empty catalog.
///
/// A competitor whose save fails is logged and left out of the result.
pub async fn collect_competitor_insights<S: InsightSink>(
    client: &StorefrontClient,
    search: &SearchClient,
    sink: &S,
    brand_name: &str,
    settings: &DiscoverySettings,
) -> Vec<BrandRecord> {
    let urls = find_competitors(
        search,
        brand_name,
        settings.results,
        &settings.platform_marker,
    )
    .await
    .into_urls();

    let mut records = Vec::with_capacity(urls.len());
    for url in urls {
        let record = client.fetch_all(&url).await;
        if !record.has_catalog() {
            tracing::info!(competitor = %url, "competitor has no catalog, skipping");
            continue;
        }
        if let Err(e) = sink.save(&record).await {
            tracing::warn!(competitor = %url, error = %e, "failed to persist competitor insights");
            continue;
        }
        records.push(record);
    }
    records
}
