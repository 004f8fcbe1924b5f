//! Persistence seam between the scrape pipeline and a storage backend.

use std::future::Future;

use crate::types::BrandRecord;

/// Destination for finished brand records.
///
/// Implementations must upsert by `record.website_url`: a second save for the
/// same URL replaces every field of the first one.
pub trait InsightSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persists one record, replacing any prior snapshot for the same URL.
    fn save(&self, record: &BrandRecord) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
