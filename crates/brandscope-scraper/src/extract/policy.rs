//! Policy pages and the brand narrative ("about") page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{element_text, non_empty, selector};
use crate::client::StorefrontClient;

pub const PRIVACY_POLICY_PATH: &str = "/pages/privacy-policy";
pub const RETURN_POLICY_PATH: &str = "/pages/return-policy";
pub const REFUND_POLICY_PATH: &str = "/pages/refund-policy";
pub const ABOUT_PATH: &str = "/pages/about";

static POLICY_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| selector(".page-content, .main-content"));
static ABOUT_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| selector(".about-content, .main-content"));

impl StorefrontClient {
    /// Fetches a policy page and returns its main content text.
    pub async fn fetch_policy(&self, store_url: &str, path: &str) -> Option<String> {
        let page = self.fetch_page(store_url, path).await?;
        policy_text(&page.document())
    }

    pub async fn fetch_privacy_policy(&self, store_url: &str) -> Option<String> {
        self.fetch_policy(store_url, PRIVACY_POLICY_PATH).await
    }

    /// Return policy, falling back to the refund-policy page when the
    /// return-policy page yields no content.
    pub async fn fetch_return_policy(&self, store_url: &str) -> Option<String> {
        if let Some(text) = self.fetch_policy(store_url, RETURN_POLICY_PATH).await {
            return Some(text);
        }
        self.fetch_policy(store_url, REFUND_POLICY_PATH).await
    }

    /// Brand narrative from the "about" page.
    pub async fn fetch_brand_context(&self, store_url: &str) -> Option<String> {
        let page = self.fetch_page(store_url, ABOUT_PATH).await?;
        about_text(&page.document())
    }
}

/// Text of the first `.page-content` / `.main-content` element.
///
/// `None` when no such element exists or it holds only whitespace.
#[must_use]
pub fn policy_text(document: &Html) -> Option<String> {
    document
        .select(&POLICY_CONTENT)
        .next()
        .map(element_text)
        .and_then(non_empty)
}

/// Text of the first `.about-content` / `.main-content` element.
#[must_use]
pub fn about_text(document: &Html) -> Option<String> {
    document
        .select(&ABOUT_CONTENT)
        .next()
        .map(element_text)
        .and_then(non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_text_takes_first_matching_container() {
        let html = Html::parse_document(
            r#"<nav>menu</nav>
               <div class="main-content"><p>We respect</p><p> your privacy.</p></div>
               <div class="page-content">second</div>"#,
        );
        assert_eq!(
            policy_text(&html).as_deref(),
            Some("We respect your privacy.")
        );
    }

    #[test]
    fn policy_text_absent_without_container() {
        let html = Html::parse_document("<body><p>Nothing here</p></body>");
        assert!(policy_text(&html).is_none());
    }

    #[test]
    fn blank_container_counts_as_absent() {
        let html = Html::parse_document(r#"<div class="page-content">   </div>"#);
        assert!(policy_text(&html).is_none());
    }

    #[test]
    fn about_text_prefers_document_order() {
        let html = Html::parse_document(
            r#"<div class="about-content">Founded in a garage.</div>
               <div class="main-content">Generic</div>"#,
        );
        assert_eq!(about_text(&html).as_deref(), Some("Founded in a garage."));
    }

    #[test]
    fn about_text_ignores_page_content_class() {
        let html = Html::parse_document(r#"<div class="page-content">Policy body</div>"#);
        assert!(about_text(&html).is_none());
    }
}
