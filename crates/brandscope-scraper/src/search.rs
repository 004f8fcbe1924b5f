//! Keyword search against an RSS-speaking web search endpoint.
//!
//! The default endpoint is Bing web search with `format=rss`, which returns
//! plain `<item><link>` results without requiring an API key. Any endpoint
//! that accepts `q`, `format=rss`, and `count` query parameters and answers
//! with an RSS 2.0 document works.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::{Client, Url};

use crate::error::ScraperError;

/// HTTP client for the search provider.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: Url,
}

impl SearchClient {
    /// Creates a `SearchClient` for `base_url`.
    ///
    /// `base_url` may carry its own query string (e.g. `?setlang=en`); the
    /// search parameters are appended to it.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `base_url` does not parse.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| ScraperError::InvalidUrl {
            url: trimmed.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Runs `query` and returns at most `limit` result links in rank order.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`]: network or TLS failure.
    /// - [`ScraperError::Search`]: non-2xx status from the provider.
    /// - [`ScraperError::Xml`]: the response is not well-formed XML.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, ScraperError> {
        let url = self.search_url(query, limit);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/rss+xml,text/xml;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Search(format!(
                "provider returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        parse_result_links(&body, limit)
    }

    fn search_url(&self, query: &str, limit: usize) -> Url {
        let params = format!(
            "q={}&format=rss&count={limit}",
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        );
        let mut url = self.base_url.clone();
        let combined = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{params}"),
            _ => params,
        };
        url.set_query(Some(&combined));
        url
    }
}

/// Pulls `<item><link>` values out of an RSS document, stopping after `limit`.
pub(crate) fn parse_result_links(xml: &str, limit: usize) -> Result<Vec<String>, ScraperError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut links = Vec::new();
    let mut in_item = false;
    let mut in_link = false;

    loop {
        if links.len() >= limit {
            break;
        }
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => in_item = true,
                b"link" if in_item => in_link = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => in_item = false,
                b"link" => in_link = false,
                _ => {}
            },
            Ok(Event::Text(e)) if in_link => {
                let text = e.unescape()?.trim().to_owned();
                if !text.is_empty() {
                    links.push(text);
                }
            }
            Ok(Event::CData(e)) if in_link => {
                let text = String::from_utf8_lossy(e.as_ref()).trim().to_owned();
                if !text.is_empty() {
                    links.push(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ScraperError::Xml(e)),
            _ => {}
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0"><channel>
  <title>Bing: acme competitors</title>
  <link>https://www.bing.com/search?q=acme</link>
  <item><title>Rival</title><link>https://rival.myshopify.com/</link></item>
  <item><title>Other</title><link>https://other.example.com/a?b=1&amp;c=2</link></item>
  <item><title>Third</title><link><![CDATA[https://third.myshopify.com]]></link></item>
</channel></rss>"#;

    #[test]
    fn channel_link_is_not_a_result() {
        let links = parse_result_links(FEED, 10).expect("parse");
        assert_eq!(
            links,
            vec![
                "https://rival.myshopify.com/",
                "https://other.example.com/a?b=1&c=2",
                "https://third.myshopify.com",
            ]
        );
    }

    #[test]
    fn stops_at_limit() {
        let links = parse_result_links(FEED, 1).expect("parse");
        assert_eq!(links, vec!["https://rival.myshopify.com/"]);
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let result = parse_result_links("<rss><channel><item><link>x</item></rss>", 3);
        assert!(result.is_err());
    }

    #[test]
    fn search_url_encodes_query() {
        let client = SearchClient::new("https://search.example/rss/", 5, "test").expect("client");
        assert_eq!(
            client.search_url("acme site:*.myshopify.com", 3).as_str(),
            "https://search.example/rss?q=acme%20site%3A%2A%2Emyshopify%2Ecom&format=rss&count=3"
        );
    }

    #[test]
    fn search_url_keeps_configured_query() {
        let client = SearchClient::new("https://search.example/search?setlang=en", 5, "test")
            .expect("client");
        assert_eq!(
            client.search_url("acme", 3).as_str(),
            "https://search.example/search?setlang=en&q=acme&format=rss&count=3"
        );
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let err = SearchClient::new("not a url", 5, "test").expect_err("invalid base");
        assert!(matches!(err, ScraperError::InvalidUrl { .. }), "{err:?}");
    }
}
