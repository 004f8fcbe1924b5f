//! Social media links on the landing page.

use std::sync::LazyLock;

use brandscope_core::{SocialHandle, SocialPlatform};
use scraper::{Html, Selector};

use super::selector;
use crate::client::{absolutize_href, StorefrontClient};

static SOCIAL_LINK: LazyLock<Selector> = LazyLock::new(|| {
    selector(r#"a[href*="instagram.com"], a[href*="facebook.com"], a[href*="tiktok.com"]"#)
});

impl StorefrontClient {
    pub async fn fetch_social_handles(&self, store_url: &str) -> Vec<SocialHandle> {
        match self.fetch_page(store_url, "").await {
            Some(page) => social_handles(&page.document(), store_url),
            None => Vec::new(),
        }
    }
}

/// Collects social links in document order.
///
/// Repeated links produce repeated entries.
#[must_use]
pub fn social_handles(document: &Html, store_url: &str) -> Vec<SocialHandle> {
    document
        .select(&SOCIAL_LINK)
        .filter_map(|link| {
            let href = link.value().attr("href")?.trim();
            let platform = SocialPlatform::from_href(href)?;
            let url = absolutize_href(store_url, href)?;
            Some(SocialHandle { platform, url })
        })
        .collect()
}
