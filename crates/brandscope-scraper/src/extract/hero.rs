//! Featured ("hero") products shown on the storefront landing page.

use std::sync::LazyLock;

use brandscope_core::Product;
use scraper::{Html, Selector};

use super::{first_text, selector};
use crate::client::{absolutize_href, StorefrontClient};

static PRODUCT_CARD: LazyLock<Selector> =
    LazyLock::new(|| selector(".product-card, .featured-product"));
static CARD_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".product-title"));
static CARD_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static CARD_PRICE: LazyLock<Selector> = LazyLock::new(|| selector(".price"));
static CARD_MONEY: LazyLock<Selector> = LazyLock::new(|| selector(".money"));
static CARD_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img[src]"));

impl StorefrontClient {
    /// Fetches the landing page and extracts its hero products.
    pub async fn fetch_hero_products(&self, store_url: &str) -> Vec<Product> {
        match self.fetch_page(store_url, "").await {
            Some(page) => hero_products(&page.document(), store_url),
            None => Vec::new(),
        }
    }
}

/// Extracts product cards from a landing page.
///
/// A card is kept only when both its title and its `data-handle` attribute
/// are non-empty; partial cards are dropped rather than stored with blanks.
#[must_use]
pub fn hero_products(document: &Html, store_url: &str) -> Vec<Product> {
    document
        .select(&PRODUCT_CARD)
        .filter_map(|card| {
            let title = first_text(card, &CARD_TITLE)
                .filter(|t| !t.is_empty())
                .or_else(|| first_text(card, &CARD_HEADING))
                .unwrap_or_default();
            let handle = card
                .value()
                .attr("data-handle")
                .map(str::trim)
                .unwrap_or_default()
                .to_owned();
            if title.is_empty() || handle.is_empty() {
                return None;
            }

            let price = first_text(card, &CARD_PRICE)
                .filter(|p| !p.is_empty())
                .or_else(|| first_text(card, &CARD_MONEY))
                .unwrap_or_default();
            let image = card
                .select(&CARD_IMAGE)
                .next()
                .and_then(|img| img.value().attr("src"))
                .filter(|src| !src.trim().is_empty())
                .and_then(|src| absolutize_href(store_url, src.trim()));

            Some(Product {
                title,
                handle,
                price,
                image,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = "https://good-store.myshopify.com";

    #[test]
    fn extracts_complete_cards() {
        let html = Html::parse_document(
            r#"<div class="product-card" data-handle="classic-tee">
                 <span class="product-title"> Classic Tee </span>
                 <span class="price">$25.00</span>
                 <img src="/cdn/tee.png">
               </div>"#,
        );
        let products = hero_products(&html, STORE);
        assert_eq!(
            products,
            vec![Product {
                title: "Classic Tee".to_string(),
                handle: "classic-tee".to_string(),
                price: "$25.00".to_string(),
                image: Some("https://good-store.myshopify.com/cdn/tee.png".to_string()),
            }]
        );
    }

    #[test]
    fn falls_back_to_heading_and_money() {
        let html = Html::parse_document(
            r#"<section class="featured-product" data-handle="mug">
                 <h3>Camp Mug</h3><span class="money">$12</span>
               </section>"#,
        );
        let products = hero_products(&html, STORE);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Camp Mug");
        assert_eq!(products[0].price, "$12");
        assert!(products[0].image.is_none());
    }

    #[test]
    fn card_without_handle_is_excluded() {
        let html = Html::parse_document(
            r#"<div class="product-card"><h3>Orphan</h3></div>
               <div class="product-card" data-handle=""><h3>Blank</h3></div>
               <div class="product-card" data-handle="kept"><h3>Kept</h3></div>"#,
        );
        let products = hero_products(&html, STORE);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].handle, "kept");
    }

    #[test]
    fn card_without_title_is_excluded() {
        let html = Html::parse_document(
            r#"<div class="product-card" data-handle="untitled"><span class="price">$1</span></div>"#,
        );
        assert!(hero_products(&html, STORE).is_empty());
    }

    #[test]
    fn protocol_relative_image_becomes_https() {
        let html = Html::parse_document(
            r#"<div class="product-card" data-handle="cap"><h3>Cap</h3>
               <img src="//cdn.example.com/cap.jpg"></div>"#,
        );
        let products = hero_products(&html, STORE);
        assert_eq!(
            products[0].image.as_deref(),
            Some("https://cdn.example.com/cap.jpg")
        );
    }
}
