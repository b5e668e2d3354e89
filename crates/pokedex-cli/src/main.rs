//! Pokédex CLI
//!
//! Thin wrapper around pokedex-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # List the first 151 creatures
//! pokedex list
//!
//! # Search the list by name, number or type
//! pokedex list --search grass
//!
//! # Print id/name pairs only
//! pokedex list --names
//!
//! # Show one creature by name or id
//! pokedex show Bulbasaur
//! pokedex show --id UG9rZW1vbjowMDE=
//!
//! # Build the query string that opens a creature's detail view
//! pokedex link Bulbasaur --query "?sort=asc"
//! pokedex link --clear --query "?sort=asc&pokemon=Bulbasaur"
//! ```

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser, Subcommand};
use pokedex_core::{
    close_creature, creature_options, open_creature, CatalogClient, CatalogConfig,
    CreatureDetail, CreatureSummary, DetailKey, MemoryUrlState, SearchQuery,
};

/// Pokédex - creature catalog browser
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version = "0.1.0")]
#[command(about = "Pok\u{e9}dex - creature catalog browser")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// GraphQL endpoint of the catalog
    #[arg(short, long, global = true, env = "POKEDEX_ENDPOINT")]
    endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "POKEDEX_TIMEOUT_SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List creatures, optionally filtered
    List {
        /// Number of creatures to fetch
        #[arg(short, long, env = "POKEDEX_LIST_LIMIT")]
        limit: Option<u32>,

        /// Case-insensitive search over name, number and types
        #[arg(short, long)]
        search: Option<String>,

        /// Print `id<TAB>name` pairs only
        #[arg(long)]
        names: bool,
    },

    /// Show one creature's details
    #[command(group(ArgGroup::new("key").required(true).args(["name", "id"])))]
    Show {
        /// Creature name
        name: Option<String>,

        /// Catalog id
        #[arg(long)]
        id: Option<String>,
    },

    /// Print the query string that selects (or deselects) a creature
    #[command(group(ArgGroup::new("action").required(true).args(["name", "clear"])))]
    Link {
        /// Creature name to select
        name: Option<String>,

        /// Remove the selection instead
        #[arg(long)]
        clear: bool,

        /// Existing query string to start from
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(
    endpoint: Option<String>,
    limit: Option<u32>,
    timeout: Option<u64>,
) -> Result<CatalogClient> {
    let config = CatalogConfig::from_overrides(endpoint, limit, timeout)?;
    tracing::info!(endpoint = %config.endpoint, limit = config.list_limit, "Using catalog");
    Ok(CatalogClient::new(config)?)
}

fn print_summary(creature: &CreatureSummary) {
    println!(
        "#{:<4} {:<12} {}",
        creature.number,
        creature.name,
        creature.types.join(", ")
    );
}

fn print_detail(creature: &CreatureDetail) {
    println!("{} (#{})", creature.name, creature.number);
    println!("  ID: {}", creature.id);
    println!("  Classification: {}", creature.classification);
    println!("  Height: {}", creature.height);
    println!("  Weight: {}", creature.weight);
    println!("  Types: {}", creature.types.join(", "));
    println!("  Resistant: {}", creature.resistant.join(", "));
    println!("  Weaknesses: {}", creature.weaknesses.join(", "));
    println!("  Max HP: {}", creature.max_hp);
    println!("  Max CP: {}", creature.max_cp);
    println!("  Flee Rate: {}%", creature.flee_percent());
    println!("  Image: {}", creature.image);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::List {
            limit,
            search,
            names,
        } => {
            let client = build_client(cli.endpoint, limit, cli.timeout)?;
            let all = client.list_default().await?;

            let query = SearchQuery::new(search.as_deref().unwrap_or(""));
            let matches: Vec<CreatureSummary> = query.apply(&all).into_iter().cloned().collect();

            if names {
                for option in creature_options(&matches) {
                    println!("{}\t{}", option.value, option.label);
                }
            } else if matches.is_empty() {
                println!("No Pok\u{e9}mon found.");
            } else {
                for creature in &matches {
                    print_summary(creature);
                }
                println!();
                println!("{} of {} creatures", matches.len(), all.len());
            }
        }

        Commands::Show { name, id } => {
            let client = build_client(cli.endpoint, None, cli.timeout)?;
            let key = DetailKey { id, name };

            match client.creature(&key).await? {
                Some(creature) => print_detail(&creature),
                None => {
                    let wanted = key.name.or(key.id).unwrap_or_default();
                    bail!("No Pok\u{e9}mon matches \"{}\"", wanted);
                }
            }
        }

        Commands::Link { name, clear, query } => {
            let mut state = MemoryUrlState::new(&query);
            match name {
                Some(name) if !clear => open_creature(&mut state, &name),
                _ => close_creature(&mut state),
            }
            println!("{}", state.query_string());
        }
    }

    Ok(())
}
