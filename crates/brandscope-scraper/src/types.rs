//! Response types for the public storefront `products.json` endpoint.
//!
//! Only the fields the catalog extractor reads are modelled, and every one
//! of them is defaulted: third-party stores routinely omit `images` or send
//! it as `null`, return `null` titles on draft products, or render `price` as
//! a JSON number instead of the usual decimal string.

use serde::Deserialize;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub products: Vec<CatalogEntry>,
}

/// A single product entry.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub title: Option<String>,

    /// URL slug for the product page (e.g., `"classic-tee"`).
    #[serde(default)]
    pub handle: Option<String>,

    /// `None` when the key is absent or explicitly `null`.
    #[serde(default)]
    pub variants: Option<Vec<CatalogVariant>>,

    #[serde(default)]
    pub images: Option<Vec<CatalogImage>>,
}

/// A purchasable variant. Only the price is read.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogVariant {
    /// Usually a decimal string (`"30.00"`); occasionally a bare number.
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogImage {
    /// Canonical CDN URL.
    #[serde(default)]
    pub src: Option<String>,
}
