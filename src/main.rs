//! Server entry point for the climate observation API.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use climate_api::config::ApiConfig;
use climate_api::store::ClimateStore;
use climate_api::web;

#[derive(Parser)]
#[command(name = "climate_api")]
#[command(about = "Read-only HTTP API over a climate observation archive", long_about = None)]
struct Cli {
    /// SQLite database URL, e.g. sqlite:resources/climate.sqlite
    #[arg(long)]
    database_url: Option<String>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env()?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!(database_url = %config.database_url, "Opening climate database");
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid database URL: {}", config.database_url))?
        .read_only(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open climate database: {}", config.database_url))?;

    web::run(&config.bind_addr(), ClimateStore::new(pool)).await
}
