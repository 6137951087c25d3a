use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`crate::traits::CatalogSearch::stats`], these counts reflect
/// the materialized in-memory catalog after ingestion filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub records: usize,
    /// Distinct non-empty company names.
    pub companies: usize,
    /// Distinct specified destination countries.
    pub destinations: usize,
}
