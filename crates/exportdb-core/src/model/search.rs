// crates/exportdb-core/src/model/search.rs
use crate::common::CatalogStats;
use crate::model::catalog::{Catalog, Record};
use crate::text::fold_key;
use crate::traits::{CatalogSearch, ProductMatch};
use std::collections::HashSet;

impl ProductMatch for Record {
    fn product_str(&self) -> &str {
        &self.product
    }
}

impl CatalogSearch for Catalog {
    fn stats(&self) -> CatalogStats {
        let companies: HashSet<&str> = self
            .records
            .iter()
            .map(|r| r.company_name.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        let destinations: HashSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.destination())
            .collect();
        CatalogStats {
            records: self.records.len(),
            companies: companies.len(),
            destinations: destinations.len(),
        }
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn search(&self, query: &str) -> Vec<&Record> {
        let q = fold_key(query);
        let mut out = Vec::new();

        // Linear scan over the flat records vector, in dataset order.
        // Folding the query once outside the loop; each record folds on the
        // fly (the catalog is small enough that no key index is warranted).
        for r in &self.records {
            if fold_key(&r.product).contains(&q) {
                out.push(r);
            }
        }
        out
    }
}
