//! HTTP client for public storefront pages and the catalog JSON endpoint.
//!
//! Every fetch is best-effort: a non-2xx status, a transport failure, or an
//! undecodable body is reported as absence (`None`), never as an error. The
//! extractors built on top treat "no page" as the normal case.

mod fetch_all;
mod origin;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ScraperError;

pub use origin::{absolutize_href, brand_name_from_url, parse_store_url, resolve_url};
pub(crate) use origin::extract_domain;

/// A successfully fetched storefront page.
///
/// Holds the raw body rather than a parsed tree: `scraper::Html` is not
/// `Send`, so documents are parsed inside synchronous extractor code and
/// never live across an `.await`.
#[derive(Debug, Clone)]
pub struct Page {
    /// Absolute URL the page was requested from.
    pub url: String,
    pub body: String,
}

impl Page {
    /// Parses the page body as an HTML document.
    #[must_use]
    pub fn document(&self) -> scraper::Html {
        scraper::Html::parse_document(&self.body)
    }
}

/// HTTP client for storefront pages.
///
/// One instance is meant to be shared for the lifetime of the process; the
/// underlying `reqwest::Client` pools connections across calls.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    pub(crate) client: Client,
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `path` relative to `base_url`.
    ///
    /// Returns `None` on any transport failure or non-2xx status.
    pub async fn fetch_page(&self, base_url: &str, path: &str) -> Option<Page> {
        match self.try_fetch_text(base_url, path).await {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::debug!(
                    store = %extract_domain(base_url),
                    path,
                    error = %e,
                    "storefront page unavailable"
                );
                None
            }
        }
    }

    /// Fetches `path` relative to `base_url` and decodes the body as JSON.
    ///
    /// Returns `None` on any transport failure, non-2xx status, or body
    /// that does not decode into `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, base_url: &str, path: &str) -> Option<T> {
        let page = self.fetch_page(base_url, path).await?;
        match serde_json::from_str::<T>(&page.body) {
            Ok(parsed) => Some(parsed),
            Err(source) => {
                let e = ScraperError::Deserialize {
                    context: page.url,
                    source,
                };
                tracing::debug!(
                    store = %extract_domain(base_url),
                    path,
                    error = %e,
                    "storefront JSON payload undecodable"
                );
                None
            }
        }
    }

    async fn try_fetch_text(&self, base_url: &str, path: &str) -> Result<Page, ScraperError> {
        let url = resolve_url(base_url, path).ok_or_else(|| ScraperError::InvalidUrl {
            url: base_url.to_owned(),
            reason: format!("cannot resolve path \"{path}\" against it"),
        })?;

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/json;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(Page { url, body })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
