//! Full product catalog from the `products.json` endpoint.

use brandscope_core::Product;

use crate::client::{extract_domain, StorefrontClient};
use crate::types::{CatalogEntry, CatalogResponse};

/// Catalog endpoint, requesting the largest page the platform serves.
pub const CATALOG_PATH: &str = "/products.json?limit=250";

impl StorefrontClient {
    /// Fetches the store catalog.
    ///
    /// Any fetch or decode failure yields an empty list; a missing catalog is
    /// not fatal to the rest of the record.
    pub async fn fetch_catalog(&self, store_url: &str) -> Vec<Product> {
        let Some(response) = self
            .fetch_json::<CatalogResponse>(store_url, CATALOG_PATH)
            .await
        else {
            tracing::debug!(store = %extract_domain(store_url), "catalog endpoint unavailable");
            return Vec::new();
        };
        catalog_products(response)
    }
}

/// Converts a decoded catalog response into products.
///
/// Title and handle are copied verbatim; entries missing either are dropped.
/// Price comes from the first variant (empty string when there is none) and
/// the image from the first image's `src`.
#[must_use]
pub fn catalog_products(response: CatalogResponse) -> Vec<Product> {
    response
        .products
        .into_iter()
        .filter_map(catalog_product)
        .collect()
}

fn catalog_product(entry: CatalogEntry) -> Option<Product> {
    let title = entry.title.filter(|t| !t.is_empty())?;
    let handle = entry.handle.filter(|h| !h.is_empty())?;

    let price = entry
        .variants
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|v| v.price)
        .map(|value| match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default();

    let image = entry
        .images
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|img| img.src);

    Some(Product {
        title,
        handle,
        price,
        image,
    })
}
