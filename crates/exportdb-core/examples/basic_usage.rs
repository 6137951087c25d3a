//! Basic usage example for exportdb-core
//!
//! This example demonstrates how to:
//! - Load the bundled catalog
//! - Search products by substring
//! - Derive the country filter options
//! - Page through results with a session

use exportdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== exportdb-core Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading product catalog...");
    let catalog = Catalog::load()?;
    println!("✓ Catalog loaded successfully\n");

    // Example 1: Catalog statistics
    println!("--- Example 1: Catalog statistics ---");
    let stats = catalog.stats();
    println!("Records: {}", stats.records);
    println!("Companies: {}", stats.companies);
    println!("Destinations: {}", stats.destinations);
    println!();

    // Example 2: Substring search
    println!("--- Example 2: Search products containing 'coffee' ---");
    let hits = catalog.search("coffee");
    println!("Found {} records:", hits.len());
    for r in &hits {
        println!(
            "- {} ({}) -> {}",
            r.product,
            r.company_name,
            r.destination().unwrap_or("N/A")
        );
    }
    println!();

    // Example 3: Empty query matches everything
    println!("--- Example 3: Empty query ---");
    println!("Empty query matches {} records", catalog.search("").len());
    println!();

    // Example 4: Drive the pipeline through a session
    println!("--- Example 4: Session walkthrough ---");
    let mut session = Session::new();
    session.set_query("tea");
    session.search(&catalog);

    println!("Countries for 'tea': {:?}", session.country_options());

    let page = session.page();
    println!("Page {} of {}:", page.page, page.total_pages);
    for r in &page.items {
        match r.net_price {
            Some(p) => println!("- {} ({}): ${p}", r.product, r.company_name),
            None => println!("- {} ({}): no price", r.product, r.company_name),
        }
    }

    Ok(())
}
