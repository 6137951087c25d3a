// crates/exportdb-core/src/loader/common_io.rs
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
#[cfg(feature = "builder")]
use std::path::PathBuf;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it, and transparently decompresses `.gz`
/// sources. Returns a generic reader so the caller doesn't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CatalogError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

/// Opens a sidecar cache file. Cache files are gzipped exactly when the
/// crate is built with `compact`; the cache suffix encodes the mode so the
/// two layouts never mix.
#[cfg(feature = "builder")]
pub fn open_cache_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CatalogError::NotFound(format!("cache not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

/// Sidecar cache location for a source dataset: `<file>.<suffix>` next to it.
#[cfg(feature = "builder")]
pub fn get_cache_path(source_path: &Path, suffix: &str) -> PathBuf {
    let filename = source_path.file_name().unwrap_or_default().to_string_lossy();
    source_path.with_file_name(format!("{filename}.{suffix}"))
}

/// A cache is fresh when it exists and is no older than its source.
/// Any metadata failure counts as stale.
#[cfg(feature = "builder")]
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let (Ok(src_meta), Ok(cache_meta)) = (std::fs::metadata(source), std::fs::metadata(cache))
    else {
        return false;
    };
    match (src_meta.modified(), cache_meta.modified()) {
        (Ok(src_time), Ok(cache_time)) => cache_time >= src_time,
        _ => false,
    }
}
