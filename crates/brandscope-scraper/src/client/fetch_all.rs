//! Whole-store extraction for `StorefrontClient`.

use std::collections::BTreeMap;

use brandscope_core::BrandRecord;

use super::{extract_domain, StorefrontClient};
use crate::extract;

impl StorefrontClient {
    /// Runs every extractor against one store and assembles the record.
    ///
    /// Extractors run one after another and each degrades to its empty value
    /// on failure, so this never fails. The landing page is fetched once and
    /// shared by the hero-product, social, and important-link extractors.
    ///
    /// Callers decide usability with [`BrandRecord::has_catalog`].
    pub async fn fetch_all(&self, store_url: &str) -> BrandRecord {
        let store = extract_domain(store_url);

        let product_catalog = self.fetch_catalog(store_url).await;

        let (hero_products, social_handles, important_links) =
            match self.fetch_page(store_url, "").await {
                Some(landing) => {
                    let document = landing.document();
                    (
                        extract::hero_products(&document, store_url),
                        extract::social_handles(&document, store_url),
                        extract::important_links(&document, store_url),
                    )
                }
                None => {
                    tracing::debug!(store = %store, "landing page unavailable");
                    (Vec::new(), Vec::new(), BTreeMap::new())
                }
            };

        let privacy_policy = self.fetch_privacy_policy(store_url).await;
        let return_policy = self.fetch_return_policy(store_url).await;
        let faqs = self.fetch_faqs(store_url).await;
        let contact_details = self.fetch_contact_details(store_url).await;
        let brand_context = self.fetch_brand_context(store_url).await;

        let record = BrandRecord {
            website_url: store_url.to_owned(),
            product_catalog,
            hero_products,
            privacy_policy,
            return_policy,
            faqs,
            social_handles,
            contact_details,
            brand_context,
            important_links,
        };

        tracing::info!(
            store = %store,
            catalog = record.product_catalog.len(),
            hero = record.hero_products.len(),
            faqs = record.faqs.len(),
            social = record.social_handles.len(),
            links = record.important_links.len(),
            privacy_policy = record.privacy_policy.is_some(),
            return_policy = record.return_policy.is_some(),
            brand_context = record.brand_context.is_some(),
            "storefront extraction finished"
        );

        record
    }
}
