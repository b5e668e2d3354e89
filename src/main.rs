#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pokedex_core::{CatalogClient, CatalogConfig};

/// Global catalog client, built from command line and environment
static CATALOG: OnceLock<CatalogClient> = OnceLock::new();

/// Get the catalog client, if startup configured one
pub fn get_catalog() -> Option<CatalogClient> {
    CATALOG.get().cloned()
}

/// Pokédex - browse the creature catalog
#[derive(Parser, Debug)]
#[command(name = "pokedex-desktop")]
#[command(about = "Pokédex - searchable creature catalog with detail view")]
struct Args {
    /// GraphQL endpoint of the catalog
    #[arg(short, long, env = "POKEDEX_ENDPOINT")]
    endpoint: Option<String>,

    /// Number of creatures to load
    #[arg(short, long, env = "POKEDEX_LIST_LIMIT")]
    limit: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long, env = "POKEDEX_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,pokedex=info,pokedex_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = CatalogConfig::from_overrides(args.endpoint, args.limit, args.timeout)?;

    tracing::info!(
        endpoint = %config.endpoint,
        limit = config.list_limit,
        "Starting Pok\u{e9}dex"
    );

    let _ = CATALOG.set(CatalogClient::new(config)?);

    let window = WindowBuilder::new()
        .with_title("Pok\u{e9}dex")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
