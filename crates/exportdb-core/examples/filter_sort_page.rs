//! Filtering, sorting and pagination example for exportdb-core
//!
//! Demonstrates the individual presenter stages and the state lifecycle.

use exportdb_core::present;
use exportdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== exportdb-core Filter/Sort/Page Example ===\n");

    let catalog = Catalog::load()?;
    let matched = catalog.search("");
    println!("Matched set: {} records\n", matched.len());

    // Example 1: Derived country options
    println!("--- Example 1: Country options (first-seen order) ---");
    for c in present::country_options(&matched) {
        println!("- {c}");
    }
    println!();

    // Example 2: Filter, then sort descending
    println!("--- Example 2: Exports to Belgium, high to low ---");
    let filtered = present::filter_by_country(&matched, "Belgium");
    let sorted = present::sort_by_price(filtered, SortDir::Descending);
    for r in &sorted {
        match r.net_price {
            Some(p) => println!("- {} ({}): ${p}", r.product, r.company_name),
            None => println!("- {} ({}): no price", r.product, r.company_name),
        }
    }
    println!();

    // Example 3: Pagination windows
    println!("--- Example 3: Pages of the full sorted set ---");
    let all_sorted = present::sort_by_price(matched, SortDir::Ascending);
    let pages = present::total_pages(all_sorted.len());
    for p in 1..=pages {
        let page = present::paginate(&all_sorted, p);
        println!(
            "page {} of {}: {} records",
            page.page, page.total_pages, page.items.len()
        );
    }
    println!();

    // Example 4: Query change resets session state
    println!("--- Example 4: State lifecycle ---");
    let mut session = Session::new();
    session.set_query("coffee");
    session.search(&catalog);
    session.set_country("Japan");
    println!(
        "After filtering: page {} / country {}",
        session.state().page,
        session.state().country
    );
    session.set_query("tea");
    println!(
        "After editing the query: page {} / country {} / {} cached records",
        session.state().page,
        session.state().country,
        session.matched().len()
    );

    Ok(())
}
