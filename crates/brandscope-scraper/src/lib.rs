pub mod client;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod search;
pub mod types;

pub use client::{
    absolutize_href, brand_name_from_url, parse_store_url, resolve_url, Page, StorefrontClient,
};
pub use discovery::{
    collect_competitor_insights, find_competitors, DiscoveryOutcome, DiscoverySettings,
};
pub use error::ScraperError;
pub use pipeline::{collect_brand_insights, InsightsReport, PipelineError};
pub use search::SearchClient;
pub use types::{CatalogEntry, CatalogResponse};
