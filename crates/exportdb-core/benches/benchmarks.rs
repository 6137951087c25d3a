use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use exportdb_core::present::{self, QueryState, SortDir};
use exportdb_core::{Catalog, CatalogSearch, Record};

const PRODUCTS: &[&str] = &[
    "Coffee Beans",
    "Tea Leaves",
    "Macadamia Nuts",
    "Pyrethrum Extract",
    "Hides and Skins",
    "French Beans",
    "Patchouli Oil",
    "Woven Baskets",
];

const COUNTRIES: &[&str] = &["Kenya", "Belgium", "Switzerland", "United States", "China"];

fn sample_catalog(n: usize) -> Catalog {
    let records = (0..n)
        .map(|i| Record {
            company_name: format!("Exporter {i}"),
            product: PRODUCTS[i % PRODUCTS.len()].to_string(),
            export_to: Some(COUNTRIES[i % COUNTRIES.len()].to_string()),
            // every 11th record has no usable price
            net_price: if i % 11 == 0 { None } else { Some((i % 997) as f64) },
            website: None,
        })
        .collect();
    Catalog { records }
}

fn bench_search(c: &mut Criterion) {
    let catalog = sample_catalog(10_000);
    c.bench_function("search_substring_10k", |b| {
        b.iter(|| catalog.search(black_box("bean")))
    });
    c.bench_function("search_empty_query_10k", |b| {
        b.iter(|| catalog.search(black_box("")))
    });
}

fn bench_present(c: &mut Criterion) {
    let catalog = sample_catalog(10_000);
    let matched = catalog.search("");
    let state = QueryState {
        country: "Kenya".to_string(),
        sort: SortDir::Descending,
        page: 3,
    };
    c.bench_function("present_filter_sort_page_10k", |b| {
        b.iter(|| present::present(black_box(&matched), black_box(&state)))
    });
}

criterion_group!(benches, bench_search, bench_present);
criterion_main!(benches);
