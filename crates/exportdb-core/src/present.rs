// crates/exportdb-core/src/present.rs

//! # Result Presenter
//!
//! Pure transforms over a matched-record set: derived country options,
//! exact-match country filtering, stable price sorting, and pagination
//! windowing. Each stage is a deterministic function of its inputs with no
//! hidden state, so every stage can be called (and tested) independently.
//!
//! Sorting always runs over the full filtered set before the page slice is
//! taken; nothing here is page-local.

use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

/// Sentinel country option meaning "no filter".
pub const ALL_COUNTRIES: &str = "All";

/// Fixed number of records per page.
pub const PAGE_SIZE: usize = 10;

/// Price sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    #[default]
    Ascending,
    Descending,
}

impl SortDir {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }
}

impl FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDir::Ascending),
            "desc" | "descending" => Ok(SortDir::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Presentation state owned by the caller and passed into each stage.
///
/// Deliberately an explicit struct rather than ambient session globals; the
/// pipeline stages read it, they never mutate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Selected country option. [`ALL_COUNTRIES`] disables the filter.
    pub country: String,
    pub sort: SortDir,
    /// 1-based page number.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            country: ALL_COUNTRIES.to_string(),
            sort: SortDir::default(),
            page: 1,
        }
    }
}

/// One visible page of a filtered, sorted result set.
#[derive(Clone, Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a Record>,
    /// 1-based page number this slice corresponds to.
    pub page: usize,
    /// Always at least 1, even for an empty result set.
    pub total_pages: usize,
    /// Filtered result count before windowing.
    pub total_records: usize,
}

/// Distinct destination options present in `matched`, first-seen order,
/// with the [`ALL_COUNTRIES`] sentinel prepended.
///
/// Recompute this whenever the matched set changes; it drives the filter
/// selector.
pub fn country_options(matched: &[&Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![ALL_COUNTRIES.to_string()];
    for r in matched {
        if let Some(dest) = r.destination() {
            if seen.insert(dest) {
                out.push(dest.to_string());
            }
        }
    }
    out
}

/// Country filter stage.
///
/// Exact, case-sensitive equality against `export_to`; records with an
/// unspecified destination only survive the [`ALL_COUNTRIES`] pass-through.
pub fn filter_by_country<'a>(matched: &[&'a Record], country: &str) -> Vec<&'a Record> {
    if country == ALL_COUNTRIES {
        return matched.to_vec();
    }
    matched
        .iter()
        .copied()
        .filter(|r| r.destination() == Some(country))
        .collect()
}

/// Price sort stage.
///
/// Stable: records with equal prices keep their input order. Records whose
/// price failed coercion sort after every priced record in BOTH directions,
/// so a missing price never interleaves with real ones and never switches
/// ends when the direction flips. Non-finite parsed values order by
/// [`f64::total_cmp`], which keeps repeated sorts of the same input
/// identical.
pub fn sort_by_price<'a>(mut items: Vec<&'a Record>, dir: SortDir) -> Vec<&'a Record> {
    items.sort_by(|a, b| cmp_price(a, b, dir));
    items
}

fn cmp_price(a: &Record, b: &Record, dir: SortDir) -> Ordering {
    match (a.net_price, b.net_price) {
        (Some(x), Some(y)) => match dir {
            SortDir::Ascending => x.total_cmp(&y),
            SortDir::Descending => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total page count for `n` records: `max(1, ceil(n / PAGE_SIZE))`.
///
/// An empty result set still reports one (empty) page; that is a valid
/// state, not an error.
pub fn total_pages(n: usize) -> usize {
    n.div_ceil(PAGE_SIZE).max(1)
}

/// Pagination stage: slice the sorted set down to the visible window.
///
/// `page` is 1-based; a page past the end yields an empty slice rather than
/// an error. Clamping of prev/next navigation is the caller's concern (see
/// [`crate::session::Session`]).
pub fn paginate<'a>(sorted: &[&'a Record], page: usize) -> Page<'a> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    let end = start.saturating_add(PAGE_SIZE).min(sorted.len());
    let items = if start >= sorted.len() {
        Vec::new()
    } else {
        sorted[start..end].to_vec()
    };
    Page {
        items,
        page,
        total_pages: total_pages(sorted.len()),
        total_records: sorted.len(),
    }
}

/// Runs filter, sort and pagination over a matched set in one call.
pub fn present<'a>(matched: &[&'a Record], state: &QueryState) -> Page<'a> {
    let filtered = filter_by_country(matched, &state.country);
    let sorted = sort_by_price(filtered, state.sort);
    paginate(&sorted, state.page)
}
