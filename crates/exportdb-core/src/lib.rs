// crates/exportdb-core/src/lib.rs

//! # exportdb-core
//!
//! An in-memory catalog of exported products with a small, pure
//! query/transform pipeline:
//!
//! - **Query Engine** ([`traits::CatalogSearch::search`]): case-insensitive
//!   substring search over product names, dataset order preserved.
//! - **Result Presenter** ([`present`]): derived country filter options,
//!   exact-match country filtering, stable price sorting, pagination
//!   windowing (fixed page size 10).
//! - **Session** ([`session::Session`]): caller-side cache of the latest
//!   matched set plus the presentation state lifecycle (query-change reset,
//!   clamped page navigation).
//!
//! The catalog is static and read-only: loaded once (JSON source, with an
//! optional binary sidecar cache), then only ever queried.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api; // JSON views for embedding front ends
pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod present;
pub mod session;
pub mod text;
pub mod traits;
// Shared raw input (used by loaders/builders only)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, Result};
pub use crate::model::{Catalog, Record};
pub use crate::present::{Page, QueryState, SortDir, ALL_COUNTRIES, PAGE_SIZE};
pub use crate::session::Session;
// Export the search traits (crucial for users!)
pub use crate::traits::{CatalogSearch, ProductMatch};
