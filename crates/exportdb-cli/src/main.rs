//! exportdb — Command-line interface for exportdb-core
//!
//! This binary provides a simple way to search the export-product catalog
//! from your terminal. It supports printing basic statistics, searching
//! products by substring with country filtering, price sorting and paging,
//! and listing the derived country filter options for a query.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ exportdb stats
//!
//! - Search products by substring (case-insensitive)
//!   $ exportdb search coffee
//!
//! - Narrow to one destination, sort high to low, show page 2
//!   $ exportdb search tea --country "United Kingdom" --sort desc --page 2
//!
//! - Machine-readable output
//!   $ exportdb search coffee --json
//!
//! - List the country filter options a UI would offer for a query
//!   $ exportdb countries coffee
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the dataset bundled with the `exportdb-core`
//! crate and automatically caches a binary version next to it for fast
//! subsequent runs. Use `--input <path>` to point to a custom dataset
//! (`.json`, or `.json.gz` when built with the `compact` feature).
mod args;
mod display;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use exportdb_core::api::PageView;
use exportdb_core::{Catalog, CatalogSearch, Session};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    // Load the catalog (bundled dataset unless overridden)
    let catalog = match &args.input {
        Some(path) => Catalog::load_from_path(path)?,
        None => Catalog::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Records: {}", stats.records);
            println!("  Companies: {}", stats.companies);
            println!("  Destinations: {}", stats.destinations);
        }

        Commands::Search {
            query,
            country,
            sort,
            page,
            json,
        } => {
            let mut session = Session::new();
            session.set_query(query);
            session.search(&catalog);
            session.set_country(country);
            session.set_sort(sort);
            // Reach the requested page through clamped navigation, so an
            // out-of-range --page lands on the last page instead of nothing.
            for _ in 1..page {
                session.next_page();
            }

            if json {
                let view = PageView::new(&session.page(), session.country_options());
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                display::print_page(&session.page());
            }
        }

        Commands::Countries { query } => {
            let mut session = Session::new();
            session.set_query(query);
            session.search(&catalog);
            for c in session.country_options() {
                println!("{c}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Diagnostics go to stderr; stdout stays clean for results.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
