//! Command handlers. Each one builds only the clients it needs from config.

use brandscope_core::AppConfig;
use brandscope_db::PgInsightStore;
use brandscope_scraper::{
    collect_brand_insights, find_competitors, parse_store_url, DiscoveryOutcome,
    DiscoverySettings, InsightsReport, PipelineError, SearchClient, StorefrontClient,
};

fn storefront_client(config: &AppConfig) -> anyhow::Result<StorefrontClient> {
    Ok(StorefrontClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )?)
}

fn search_client(config: &AppConfig) -> anyhow::Result<SearchClient> {
    Ok(SearchClient::new(
        &config.search_url,
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )?)
}

async fn connect(config: &AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = brandscope_db::PoolConfig::from_app_config(config);
    Ok(brandscope_db::connect_pool(&config.database_url, pool_config).await?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs the insight pipeline for one store and prints the report.
///
/// With `dry_run` the store is only extracted: nothing is persisted and no
/// competitor search is made.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    raw_url: &str,
    no_competitors: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    let url = parse_store_url(raw_url)?;
    let storefront = storefront_client(config)?;

    if dry_run {
        let record = storefront.fetch_all(&url).await;
        if !record.has_catalog() {
            tracing::warn!(store = %url, "no catalog found; a real run would reject this store");
        }
        return print_json(&InsightsReport {
            brand_insights: vec![record],
            competitor_insights: Vec::new(),
        });
    }

    let search = search_client(config)?;
    let settings = if no_competitors {
        DiscoverySettings::disabled()
    } else {
        DiscoverySettings::from_app_config(config)
    };

    let pool = connect(config).await?;
    brandscope_db::run_migrations(&pool).await?;
    let store = PgInsightStore::new(pool);

    match collect_brand_insights(&storefront, &search, &store, &url, &settings).await {
        Ok(report) => print_json(&report),
        Err(PipelineError::NoCatalog { url }) => {
            anyhow::bail!("no products found at {url}; is this a storefront URL?")
        }
        Err(PipelineError::Persist(e)) => Err(anyhow::Error::new(e).context("persisting insights")),
    }
}

/// Prints competitor URLs, one per line.
pub(crate) async fn run_competitors(
    config: &AppConfig,
    brand: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let search = search_client(config)?;
    let limit = limit.unwrap_or(config.competitor_results);

    match find_competitors(&search, brand, limit, &config.platform_marker).await {
        DiscoveryOutcome::Found(urls) => {
            if urls.is_empty() {
                tracing::info!(brand, "no competitor stores found");
            }
            for url in urls {
                println!("{url}");
            }
            Ok(())
        }
        DiscoveryOutcome::SearchFailed { reason } => {
            anyhow::bail!("competitor search failed: {reason}")
        }
    }
}

/// Prints the stored record for `url`.
pub(crate) async fn run_show(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    match brandscope_db::load_brand_record(&pool, url).await {
        Ok(record) => print_json(&record),
        Err(brandscope_db::DbError::NotFound) => anyhow::bail!("no stored insights for {url}"),
        Err(e) => Err(e.into()),
    }
}

pub(crate) async fn run_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let applied = brandscope_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}
