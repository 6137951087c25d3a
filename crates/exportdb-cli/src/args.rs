use clap::{Parser, Subcommand};
use exportdb_core::{SortDir, ALL_COUNTRIES};

/// CLI arguments for exportdb
#[derive(Debug, Parser)]
#[command(
    name = "exportdb",
    version,
    about = "CLI for searching and inspecting the export-product catalog"
)]
pub struct CliArgs {
    /// Path to the dataset JSON file (default: the bundled products.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Search products by substring and print one result page
    Search {
        /// Substring to match against product names (case-insensitive);
        /// an empty string matches everything
        query: String,

        /// Restrict results to one destination country (exact match)
        #[arg(short, long, default_value = ALL_COUNTRIES)]
        country: String,

        /// Price sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        sort: SortDir,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Emit the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the destination-country filter options for a query
    Countries {
        /// Substring to match against product names
        query: String,
    },
}
