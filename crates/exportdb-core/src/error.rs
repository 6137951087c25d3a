// crates/exportdb-core/src/error.rs

use thiserror::Error;

/// Errors surfaced by the loader boundary.
///
/// The query/transform pipeline itself never fails: malformed record fields
/// degrade at ingestion (price coercion failures become `None`, records
/// without a product name are dropped) instead of producing errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset file missing or unreadable at the given location.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
