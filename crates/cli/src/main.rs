use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use shop_core::ports::ShopModel;
use shop_core::utils::parse_timestamp;
use shop_core::SalesRateServiceImpl;
use sqlite_adapter::SqliteShopModel;
use std::path::PathBuf;
use tracing::error;

/// CLI tool reporting sales per new customer over the last 24 hours
#[derive(Parser, Debug)]
#[command(name = "shop-rate")]
#[command(about = "Prints the number of sales per new customer over the last 24 hours")]
struct Cli {
    /// Path to the shop SQLite database
    #[arg(short = 'd', long = "database", env = "SHOP_DATABASE", default_value = "shop.db")]
    database: PathBuf,

    /// Evaluate the window as of this instant instead of now (RFC 3339 or "YYYY-MM-DD HH:MM:SS")
    #[arg(long = "as-of", value_parser = parse_as_of)]
    as_of: Option<DateTime<Utc>>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_as_of(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_timestamp(value).ok_or_else(|| format!("unrecognized timestamp: {value}"))
}

fn main() {
    let cli = Cli::parse();
    shop_cli::logging::init(cli.verbose);

    match run(&cli) {
        Ok(rate) => println!("{rate}"),
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    // Secondary adapter; the connection is closed when the service is dropped
    let shop_model: Box<dyn ShopModel> = Box::new(
        SqliteShopModel::open(&cli.database)
            .with_context(|| format!("failed to open {}", cli.database.display()))?,
    );

    let service = SalesRateServiceImpl::new(shop_model);

    let rate = match cli.as_of {
        Some(now) => service.execute_at(now),
        None => service.execute(),
    }
    .context("failed to compute sales rate")?;

    Ok(rate)
}
