// crates/exportdb-core/src/loader/builder.rs
use super::common_io;
use crate::error::Result;
use crate::model::{Catalog, CACHE_SUFFIX};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

impl Catalog {
    /// **Smart load:** checks the sidecar cache, falls back to the source
    /// JSON, and refreshes the cache on the way out.
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        if common_io::is_cache_fresh(path, &cache_path) {
            debug!(cache = %cache_path.display(), "catalog cache fresh, loading binary");
            return Self::read_cache(&cache_path);
        }

        debug!(source = %path.display(), "building catalog from source JSON");
        let catalog = Self::load_raw_json(path)?;

        // Cache write failures are non-fatal; the catalog itself is good.
        if let Err(e) = catalog.write_cache(&cache_path) {
            warn!(cache = %cache_path.display(), error = %e, "failed to write catalog cache");
        }

        Ok(catalog)
    }

    fn read_cache(path: &Path) -> Result<Self> {
        let mut reader = common_io::open_cache_stream(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data)?)
    }

    fn write_cache(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        let file = File::create(path)?;

        #[cfg(feature = "compact")]
        let mut writer: Box<dyn Write> =
            Box::new(GzEncoder::new(BufWriter::new(file), Compression::default()));
        #[cfg(not(feature = "compact"))]
        let mut writer: Box<dyn Write> = Box::new(BufWriter::new(file));

        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}
