//! Order-tracking, contact, and blog links from the landing page.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use brandscope_core::LinkKind;
use scraper::{Html, Selector};

use super::selector;
use crate::client::{absolutize_href, StorefrontClient};

static CANDIDATE_LINK: LazyLock<Selector> = LazyLock::new(|| {
    selector(r#"a[href*="/pages/"], a[href*="/track"], a[href*="/blogs"]"#)
});

impl StorefrontClient {
    pub async fn fetch_important_links(&self, store_url: &str) -> BTreeMap<LinkKind, String> {
        match self.fetch_page(store_url, "").await {
            Some(page) => important_links(&page.document(), store_url),
            None => BTreeMap::new(),
        }
    }
}

/// Files candidate anchors by link text.
///
/// Each anchor lands under at most one kind (first keyword wins); a later
/// anchor of the same kind replaces an earlier one.
#[must_use]
pub fn important_links(document: &Html, store_url: &str) -> BTreeMap<LinkKind, String> {
    let mut links = BTreeMap::new();
    for anchor in document.select(&CANDIDATE_LINK) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        let text = anchor.text().collect::<String>();
        let Some(kind) = LinkKind::from_link_text(&text) else {
            continue;
        };
        if let Some(url) = absolutize_href(store_url, href) {
            links.insert(kind, url);
        }
    }
    links
}
