// crates/exportdb-core/src/session.rs

//! Caller-side search session.
//!
//! Owns the matched set produced by the most recent search trigger together
//! with the presentation state, and applies the lifecycle rules: changing
//! the query text resets everything, selecting a country rewinds to page 1,
//! and page navigation clamps to `[1, total_pages]`. Filter/sort/page
//! changes recompute views from the cached set without re-querying.

use crate::model::{Catalog, Record};
use crate::present::{self, Page, QueryState, SortDir};
use crate::traits::CatalogSearch;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Session {
    query: String,
    /// Matched set cached from the latest search trigger. Replaced
    /// wholesale by the next trigger, never shared.
    matched: Vec<Record>,
    state: QueryState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The cached matched set, in dataset order.
    pub fn matched(&self) -> &[Record] {
        &self.matched
    }

    /// Update the query text. Any actual change discards the matched set
    /// and resets filter, sort and page to defaults, even before the next
    /// search trigger runs.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.matched.clear();
            self.state = QueryState::default();
        }
    }

    /// Search trigger: run the engine once against `catalog` and cache a
    /// fresh matched set. The previously displayed set is replaced.
    pub fn search(&mut self, catalog: &Catalog) {
        self.matched = catalog
            .search(&self.query)
            .into_iter()
            .cloned()
            .collect();
        self.state.page = 1;
        debug!(query = %self.query, matched = self.matched.len(), "search trigger");
    }

    /// Select a country option. Rewinds to page 1; sort is untouched.
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.state.country = country.into();
        self.state.page = 1;
    }

    pub fn set_sort(&mut self, dir: SortDir) {
        self.state.sort = dir;
    }

    /// Flip the sort direction. The current page is kept.
    pub fn toggle_sort(&mut self) {
        self.state.sort = self.state.sort.toggled();
    }

    /// Navigate forward, clamped to the last page of the filtered view.
    pub fn next_page(&mut self) {
        if self.state.page < self.total_pages() {
            self.state.page += 1;
        }
    }

    /// Navigate backward, clamped to page 1.
    pub fn prev_page(&mut self) {
        if self.state.page > 1 {
            self.state.page -= 1;
        }
    }

    /// Derived country options for the current matched set.
    pub fn country_options(&self) -> Vec<String> {
        let matched: Vec<&Record> = self.matched.iter().collect();
        present::country_options(&matched)
    }

    /// The visible page for the current state: filter, sort, then window.
    pub fn page(&self) -> Page<'_> {
        let matched: Vec<&Record> = self.matched.iter().collect();
        present::present(&matched, &self.state)
    }

    fn total_pages(&self) -> usize {
        let matched: Vec<&Record> = self.matched.iter().collect();
        let filtered = present::filter_by_country(&matched, &self.state.country);
        present::total_pages(filtered.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::ALL_COUNTRIES;

    fn catalog(n: usize) -> Catalog {
        let records = (0..n)
            .map(|i| {
                let dest = if i % 2 == 0 { "Kenya" } else { "Belgium" };
                Record {
                    company_name: format!("Company {i}"),
                    product: format!("Coffee {i}"),
                    export_to: Some(dest.to_string()),
                    net_price: Some(i as f64),
                    website: None,
                }
            })
            .collect();
        Catalog { records }
    }

    #[test]
    fn search_trigger_caches_matched_set() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(15));
        assert_eq!(s.matched().len(), 15);
        assert_eq!(s.page().items.len(), 10);
        assert_eq!(s.page().total_pages, 2);
    }

    #[test]
    fn query_change_resets_state_before_next_search() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(15));
        s.set_country("Kenya");
        s.next_page();

        s.set_query("tea");
        assert!(s.matched().is_empty());
        assert_eq!(s.state().country, ALL_COUNTRIES);
        assert_eq!(s.state().page, 1);
    }

    #[test]
    fn unchanged_query_keeps_state() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(30));
        s.next_page();
        s.set_query("coffee");
        assert_eq!(s.state().page, 2);
        assert_eq!(s.matched().len(), 30);
    }

    #[test]
    fn country_change_rewinds_to_first_page() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(30));
        s.next_page();
        assert_eq!(s.state().page, 2);
        s.set_country("Kenya");
        assert_eq!(s.state().page, 1);
    }

    #[test]
    fn sort_toggle_keeps_page() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(30));
        s.next_page();
        s.toggle_sort();
        assert_eq!(s.state().page, 2);
        assert_eq!(s.state().sort, SortDir::Descending);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(15));

        s.prev_page();
        assert_eq!(s.state().page, 1);

        s.next_page();
        s.next_page();
        s.next_page();
        assert_eq!(s.state().page, 2);
    }

    #[test]
    fn clamping_follows_the_filtered_view() {
        // 30 records, 15 per country: filtered view has 2 pages, not 3
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(30));
        s.set_country("Kenya");
        s.next_page();
        s.next_page();
        s.next_page();
        assert_eq!(s.state().page, 2);
    }

    #[test]
    fn new_search_replaces_previous_set() {
        let mut s = Session::new();
        s.set_query("coffee");
        s.search(&catalog(30));
        s.next_page();

        s.search(&catalog(5));
        assert_eq!(s.matched().len(), 5);
        assert_eq!(s.state().page, 1);
    }
}
