//! FAQ entries from the storefront FAQ page.

use std::sync::LazyLock;

use brandscope_core::Faq;
use scraper::{Html, Selector};

use super::{first_text, selector};
use crate::client::StorefrontClient;

pub const FAQ_PATH: &str = "/pages/faq";
pub const FAQ_FALLBACK_PATH: &str = "/pages/faqs";

static FAQ_ITEM: LazyLock<Selector> = LazyLock::new(|| selector(".faq-item, .accordion"));
static FAQ_QUESTION: LazyLock<Selector> =
    LazyLock::new(|| selector(".faq-question, .accordion-title"));
static FAQ_ANSWER: LazyLock<Selector> =
    LazyLock::new(|| selector(".faq-answer, .accordion-content"));

impl StorefrontClient {
    /// Fetches the FAQ page and extracts question/answer pairs.
    ///
    /// The plural path is tried only when the singular one cannot be fetched
    /// at all; a reachable page with no FAQ markup does not trigger it.
    pub async fn fetch_faqs(&self, store_url: &str) -> Vec<Faq> {
        let page = match self.fetch_page(store_url, FAQ_PATH).await {
            Some(page) => Some(page),
            None => self.fetch_page(store_url, FAQ_FALLBACK_PATH).await,
        };
        match page {
            Some(page) => faqs(&page.document()),
            None => Vec::new(),
        }
    }
}

/// Extracts FAQ items; an item needs both a question and an answer element.
#[must_use]
pub fn faqs(document: &Html) -> Vec<Faq> {
    document
        .select(&FAQ_ITEM)
        .filter_map(|item| {
            let question = first_text(item, &FAQ_QUESTION)?;
            let answer = first_text(item, &FAQ_ANSWER)?;
            Some(Faq { question, answer })
        })
        .collect()
}
