use super::*;

#[test]
fn resolve_relative_path_against_base() {
    assert_eq!(
        resolve_url("https://acme.myshopify.com", "/pages/faq").as_deref(),
        Some("https://acme.myshopify.com/pages/faq")
    );
}

#[test]
fn resolve_root_path_ignores_base_path() {
    assert_eq!(
        resolve_url("https://acme.myshopify.com/collections/all", "/products.json?limit=250")
            .as_deref(),
        Some("https://acme.myshopify.com/products.json?limit=250")
    );
}

#[test]
fn resolve_absolute_path_overrides_base() {
    assert_eq!(
        resolve_url("https://acme.myshopify.com", "https://cdn.example.com/a.png").as_deref(),
        Some("https://cdn.example.com/a.png")
    );
}

#[test]
fn resolve_empty_path_is_base() {
    assert_eq!(
        resolve_url("https://acme.myshopify.com/", "").as_deref(),
        Some("https://acme.myshopify.com/")
    );
}

#[test]
fn resolve_rejects_relative_base() {
    assert!(resolve_url("acme.myshopify.com", "/pages/faq").is_none());
}

#[test]
fn protocol_relative_href_becomes_https() {
    assert_eq!(
        absolutize_href("http://acme.myshopify.com", "//cdn.shopify.com/img.png").as_deref(),
        Some("https://cdn.shopify.com/img.png")
    );
}

#[test]
fn relative_href_resolves_against_store() {
    assert_eq!(
        absolutize_href("https://acme.myshopify.com", "/blogs/news").as_deref(),
        Some("https://acme.myshopify.com/blogs/news")
    );
}

#[test]
fn brand_name_strips_scheme_and_keeps_first_label() {
    assert_eq!(brand_name_from_url("https://acme.com"), "acme");
    assert_eq!(brand_name_from_url("http://acme-goods.myshopify.com/"), "acme-goods");
    assert_eq!(brand_name_from_url("acme.com/shop"), "acme");
}

#[test]
fn brand_name_does_not_strip_www() {
    assert_eq!(brand_name_from_url("https://www.nike.com"), "www");
}

#[test]
fn brand_name_without_dot_is_whole_remainder() {
    assert_eq!(brand_name_from_url("http://localhost/shop"), "localhost/shop");
}

#[test]
fn domain_for_logging() {
    assert_eq!(
        extract_domain("https://acme.myshopify.com/collections/all"),
        "acme.myshopify.com"
    );
    assert_eq!(extract_domain("not a url"), "not a url");
}

#[test]
fn page_document_parses_body() {
    let page = Page {
        url: "https://acme.myshopify.com/".to_string(),
        body: "<html><body><h1>Acme</h1></body></html>".to_string(),
    };
    let document = page.document();
    let h1 = scraper::Selector::parse("h1").expect("selector");
    let text: String = document
        .select(&h1)
        .next()
        .expect("h1")
        .text()
        .collect();
    assert_eq!(text, "Acme");
}

#[test]
fn store_url_accepts_http_and_https() {
    assert_eq!(
        parse_store_url("  https://acme.myshopify.com  ").expect("valid"),
        "https://acme.myshopify.com"
    );
    assert!(parse_store_url("http://localhost:8080").is_ok());
}

#[test]
fn store_url_rejects_blank_relative_and_other_schemes() {
    for raw in ["", "   ", "acme.myshopify.com", "ftp://acme.com", "mailto:hi@acme.com"] {
        let err = parse_store_url(raw).expect_err(raw);
        assert!(
            matches!(err, ScraperError::InvalidUrl { .. }),
            "{raw:?} gave {err:?}"
        );
    }
}
