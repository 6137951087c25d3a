//! exportdb prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::api::{PageView, RecordView};
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, Result};
pub use crate::model::{Catalog, Record};
pub use crate::present::{Page, QueryState, SortDir, ALL_COUNTRIES, PAGE_SIZE};
pub use crate::session::Session;
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{CatalogSearch, ProductMatch};
