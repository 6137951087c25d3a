// crates/exportdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, sidecar cache) and
//! delegates payload parsing to the JSON module. The catalog is loaded once
//! before any query executes and is never written back.

use crate::error::Result;
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

mod common_io;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "builder")]
mod builder;

static CATALOG_CACHE: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    /// Directory holding the dataset bundled with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "products.json"
    }

    /// Loads the bundled dataset, once per process.
    ///
    /// Subsequent calls clone the in-memory catalog instead of touching the
    /// filesystem again.
    pub fn load() -> Result<Self> {
        CATALOG_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file))
            })
            .cloned()
    }

    /// Loads a catalog from a dataset file.
    ///
    /// With the `json` feature the path names a source JSON dataset
    /// (`.json`, or `.json.gz` with `compact`); the `builder` feature
    /// additionally maintains a binary sidecar cache next to the source and
    /// prefers it while fresh. Without `json` the path names a pre-built
    /// binary catalog.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(feature = "builder")]
        return Self::load_via_builder(path);

        #[cfg(all(feature = "json", not(feature = "builder")))]
        return Self::load_raw_json(path);

        #[cfg(not(feature = "json"))]
        {
            use std::io::Read;
            let mut reader = common_io::open_stream(path)?;
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Ok(Self::from_bytes(&data)?)
        }
    }
}
