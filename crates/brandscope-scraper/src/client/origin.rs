//! URL resolution and brand-name helpers for the storefront client.

use crate::error::ScraperError;

/// Validates a user-supplied store URL.
///
/// Accepts only absolute `http`/`https` URLs with a host and returns the
/// trimmed input unchanged.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] for blank input, unparseable URLs,
/// other schemes, or URLs without a host.
pub fn parse_store_url(raw: &str) -> Result<String, ScraperError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ScraperError::InvalidUrl {
        url: trimmed.to_owned(),
        reason: reason.to_owned(),
    };
    if trimmed.is_empty() {
        return Err(invalid("website_url is required"));
    }
    let url = reqwest::Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("only http and https URLs are supported"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host"));
    }
    Ok(trimmed.to_owned())
}

/// Resolves `path` against `base` the way a browser resolves an `href`.
///
/// Relative paths are joined onto the base, absolute URLs replace it, and an
/// empty path yields the base itself. Returns `None` when the base is not an
/// absolute URL or the join fails.
#[must_use]
pub fn resolve_url(base: &str, path: &str) -> Option<String> {
    let base = reqwest::Url::parse(base).ok()?;
    if path.is_empty() {
        return Some(base.to_string());
    }
    base.join(path).ok().map(|u| u.to_string())
}

/// Resolves a link found on a storefront page.
///
/// Protocol-relative links (`//cdn.example.com/x`) are always promoted to
/// `https:`; everything else is resolved against the store base URL.
#[must_use]
pub fn absolutize_href(base: &str, href: &str) -> Option<String> {
    if href.starts_with("//") {
        return Some(format!("https:{href}"));
    }
    resolve_url(base, href)
}

/// Derives the search keyword for a store from its URL.
///
/// Strips the scheme, then keeps everything before the first dot:
/// `"https://acme-goods.myshopify.com"` becomes `"acme-goods"`. A leading
/// `www.` is not special, so `"https://www.acme.com"` yields `"www"`.
#[must_use]
pub fn brand_name_from_url(store_url: &str) -> String {
    let trimmed = store_url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme
        .split('.')
        .next()
        .unwrap_or(without_scheme)
        .to_owned()
}

/// Extracts the hostname from a store URL for log fields.
///
/// Falls back to the full URL string if parsing fails.
pub(crate) fn extract_domain(store_url: &str) -> String {
    reqwest::Url::parse(store_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| store_url.to_owned())
}
