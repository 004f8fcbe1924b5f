//! Offline unit tests for brandscope-db pool configuration and row types.
//! These tests do not require a live database connection.

use brandscope_core::{AppConfig, Environment};
use brandscope_db::{BrandInsightRow, DbError, PoolConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        scraper_request_timeout_secs: 30,
        scraper_user_agent: "ua".to_string(),
        search_url: "https://search.example".to_string(),
        competitor_results: 3,
        platform_marker: "myshopify.com".to_string(),
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

fn row_with_faqs(faqs: serde_json::Value) -> BrandInsightRow {
    let now = chrono::Utc::now();
    BrandInsightRow {
        id: 1,
        website_url: "https://acme.myshopify.com".to_string(),
        product_catalog: serde_json::json!([
            {"title": "Tee", "handle": "tee", "price": "10.00", "image": null}
        ]),
        hero_products: serde_json::json!([]),
        privacy_policy: None,
        return_policy: Some("30 days".to_string()),
        faqs,
        social_handles: serde_json::json!([{"platform": "TikTok", "url": "https://tiktok.com/@acme"}]),
        contact_details: serde_json::json!({"emails": [], "phones": [], "addresses": []}),
        brand_context: None,
        important_links: serde_json::json!({"order_tracking": "https://acme.myshopify.com/apps/track"}),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn row_decodes_into_record() {
    let record = row_with_faqs(serde_json::json!([]))
        .into_record()
        .expect("decode");

    assert_eq!(record.product_catalog.len(), 1);
    assert_eq!(record.product_catalog[0].price, "10.00");
    assert_eq!(record.return_policy.as_deref(), Some("30 days"));
    assert_eq!(
        record.social_handles[0].platform,
        brandscope_core::SocialPlatform::TikTok
    );
    assert_eq!(
        record
            .important_links
            .get(&brandscope_core::LinkKind::OrderTracking)
            .map(String::as_str),
        Some("https://acme.myshopify.com/apps/track")
    );
}

#[test]
fn row_with_wrong_shape_reports_column() {
    let err = row_with_faqs(serde_json::json!("not a list"))
        .into_record()
        .expect_err("decode should fail");

    assert!(matches!(err, DbError::Deserialize { field: "faqs", .. }));
}
