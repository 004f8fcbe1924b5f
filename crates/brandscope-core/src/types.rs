//! Normalized storefront record types.
//!
//! Every scrape produces exactly one [`BrandRecord`] per store URL. Each
//! sub-field is filled by an independent extractor and falls back to its
//! empty value when the storefront does not expose the information, so a
//! record is always structurally complete even when most of it is blank.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A product as listed in the storefront catalog or featured on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// Platform slug, unique within one store (e.g. `"classic-tee"`).
    pub handle: String,
    /// Display price exactly as the storefront reports it. Empty when unknown.
    pub price: String,
    /// Absolute image URL.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    TikTok,
}

impl SocialPlatform {
    /// Classifies a link target by domain substring.
    ///
    /// Instagram is checked before Facebook, Facebook before TikTok. Returns
    /// `None` when the link points at none of the three.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        if href.contains("instagram") {
            Some(Self::Instagram)
        } else if href.contains("facebook") {
            Some(Self::Facebook)
        } else if href.contains("tiktok") {
            Some(Self::TikTok)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandle {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Contact information scraped from the storefront contact page.
///
/// `emails` and `phones` are unique and sorted; `addresses` keep document
/// order and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
}

/// Fixed set of landing-page link categories worth surfacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    OrderTracking,
    ContactUs,
    Blogs,
}

impl LinkKind {
    /// Keyword checks in priority order; the first keyword found in the
    /// lower-cased link text decides the kind.
    const KEYWORDS: [(&'static str, LinkKind); 3] = [
        ("track", LinkKind::OrderTracking),
        ("contact", LinkKind::ContactUs),
        ("blog", LinkKind::Blogs),
    ];

    /// Classifies an anchor by its visible text (case-insensitive).
    #[must_use]
    pub fn from_link_text(text: &str) -> Option<Self> {
        let lowered = text.trim().to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, kind)| *kind)
    }
}

/// The unit of storage: everything extracted from one storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub website_url: String,
    pub product_catalog: Vec<Product>,
    pub hero_products: Vec<Product>,
    pub privacy_policy: Option<String>,
    pub return_policy: Option<String>,
    pub faqs: Vec<Faq>,
    pub social_handles: Vec<SocialHandle>,
    pub contact_details: ContactDetails,
    /// Brand narrative from the "about" page.
    pub brand_context: Option<String>,
    pub important_links: BTreeMap<LinkKind, String>,
}

impl BrandRecord {
    /// A record with every field at its empty default.
    #[must_use]
    pub fn empty(website_url: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
            product_catalog: Vec::new(),
            hero_products: Vec::new(),
            privacy_policy: None,
            return_policy: None,
            faqs: Vec::new(),
            social_handles: Vec::new(),
            contact_details: ContactDetails::default(),
            brand_context: None,
            important_links: BTreeMap::new(),
        }
    }

    /// A record is only usable when the catalog endpoint produced products.
    #[must_use]
    pub fn has_catalog(&self) -> bool {
        !self.product_catalog.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_platform_prefers_instagram_over_facebook() {
        assert_eq!(
            SocialPlatform::from_href("https://instagram.com/share?via=facebook"),
            Some(SocialPlatform::Instagram)
        );
        assert_eq!(
            SocialPlatform::from_href("https://www.facebook.com/acme"),
            Some(SocialPlatform::Facebook)
        );
        assert_eq!(
            SocialPlatform::from_href("https://www.tiktok.com/@acme"),
            Some(SocialPlatform::TikTok)
        );
        assert_eq!(SocialPlatform::from_href("https://x.com/acme"), None);
    }

    #[test]
    fn link_kind_first_keyword_wins() {
        assert_eq!(
            LinkKind::from_link_text("Contact & Blog"),
            Some(LinkKind::ContactUs)
        );
        assert_eq!(
            LinkKind::from_link_text("  TRACK your order "),
            Some(LinkKind::OrderTracking)
        );
        assert_eq!(LinkKind::from_link_text("Our Blog"), Some(LinkKind::Blogs));
        assert_eq!(LinkKind::from_link_text("About us"), None);
    }

    #[test]
    fn link_kind_serializes_as_snake_case_map_key() {
        let mut links = BTreeMap::new();
        links.insert(LinkKind::OrderTracking, "https://a.com/track".to_string());
        let json = serde_json::to_value(&links).expect("serialize");
        assert_eq!(json["order_tracking"], "https://a.com/track");
    }

    #[test]
    fn social_platform_serializes_with_display_name() {
        let handle = SocialHandle {
            platform: SocialPlatform::TikTok,
            url: "https://www.tiktok.com/@acme".to_string(),
        };
        let json = serde_json::to_value(&handle).expect("serialize");
        assert_eq!(json["platform"], "TikTok");
    }

    #[test]
    fn empty_record_has_no_catalog_but_present_contacts() {
        let record = BrandRecord::empty("https://good-store.myshopify.com");
        assert!(!record.has_catalog());
        assert_eq!(record.contact_details, ContactDetails::default());

        let json = serde_json::to_value(&record).expect("serialize");
        assert!(json["contact_details"].is_object());
        assert!(json["privacy_policy"].is_null());
        assert_eq!(json["important_links"], serde_json::json!({}));
    }
}
