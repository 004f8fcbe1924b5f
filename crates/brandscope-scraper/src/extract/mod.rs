//! Per-category extractors.
//!
//! Each extractor is split into a pure function over an already-parsed
//! document (unit-testable, synchronous) and an async `StorefrontClient`
//! method that fetches the page and degrades to the empty value when the
//! page is unavailable.

mod catalog;
mod contact;
mod faq;
mod hero;
mod links;
mod policy;
mod social;

use scraper::{ElementRef, Selector};

pub use catalog::{catalog_products, CATALOG_PATH};
pub use contact::{contact_details, extract_emails, extract_phones, CONTACT_PATH};
pub use faq::{faqs, FAQ_FALLBACK_PATH, FAQ_PATH};
pub use hero::hero_products;
pub use links::important_links;
pub use policy::{
    about_text, policy_text, ABOUT_PATH, PRIVACY_POLICY_PATH, REFUND_POLICY_PATH,
    RETURN_POLICY_PATH,
};
pub use social::social_handles;

/// Parses a selector literal known at compile time.
///
/// Only used to initialize `LazyLock` statics, so a bad literal fails the
/// first test that touches it.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// All descendant text of `element`, concatenated and trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Trimmed text of the first descendant of `scope` matching `selector`.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

/// Returns `Some(text)` unless `text` is empty.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
