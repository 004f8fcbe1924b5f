mod scrape;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brandscope-cli")]
#[command(about = "Extract structured brand insights from storefront sites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a store (and its competitors) and print the report as JSON
    Scrape {
        /// Absolute http(s) URL of the storefront
        url: String,

        /// Skip competitor discovery
        #[arg(long)]
        no_competitors: bool,

        /// Extract and print without touching the database or the search provider
        #[arg(long)]
        dry_run: bool,
    },
    /// Print competitor store URLs discovered for a brand keyword
    Competitors {
        /// Brand keyword, e.g. the store subdomain
        brand: String,

        /// Override the configured number of search results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the stored record for a store URL
    Show {
        /// Store URL exactly as it was scraped
        url: String,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = brandscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scrape {
            url,
            no_competitors,
            dry_run,
        } => scrape::run_scrape(&config, &url, no_competitors, dry_run).await,
        Commands::Competitors { brand, limit } => {
            scrape::run_competitors(&config, &brand, limit).await
        }
        Commands::Show { url } => scrape::run_show(&config, &url).await,
        Commands::Migrate => scrape::run_migrate(&config).await,
    }
}
