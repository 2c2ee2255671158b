mod catalog;
mod stores;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dairy-cli")]
#[command(about = "Browse the dairy storefront catalog and store directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally filtered by search text and category
    Products {
        /// Case-insensitive substring matched against name and description
        #[arg(long, short)]
        query: Option<String>,
        /// Category to show (`all` shows every category)
        #[arg(long, short)]
        category: Option<String>,
        /// Catalog YAML file (overrides `DAIRY_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// List the category tabs derived from the catalog
    Categories {
        /// Catalog YAML file (overrides `DAIRY_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// List store locations
    Stores {
        /// Zip code or city; accepted but does not narrow the list
        #[arg(long)]
        search: Option<String>,
    },
    /// Print the map directions URL for a store
    Directions {
        /// Store id
        id: u32,
        /// Maps base URL (overrides `DAIRY_MAPS_BASE_URL`)
        #[arg(long)]
        maps_base_url: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dairy_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Products {
            query,
            category,
            catalog,
        }) => catalog::run_products(
            &config,
            catalog.as_deref(),
            query.as_deref().unwrap_or_default(),
            category.as_deref().unwrap_or_default(),
        )?,
        Some(Commands::Categories { catalog }) => {
            catalog::run_categories(&config, catalog.as_deref())?;
        }
        Some(Commands::Stores { search }) => stores::run_stores(search.as_deref()),
        Some(Commands::Directions { id, maps_base_url }) => stores::run_directions(
            id,
            stores::maps_base_url(maps_base_url.as_deref(), &config)?,
        )?,
        None => println!("dairy-cli: run with --help to see available commands"),
    }

    Ok(())
}
