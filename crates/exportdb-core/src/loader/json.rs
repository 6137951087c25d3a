// crates/exportdb-core/src/loader/json.rs
use super::common_io;
use crate::error::{CatalogError, Result};
use crate::model::Catalog;
use crate::raw::RecordsRaw;
use std::path::Path;
use tracing::debug;

impl Catalog {
    /// Parses a source JSON dataset into a catalog.
    ///
    /// Malformed individual records degrade during conversion (see
    /// [`crate::model::convert::from_raw`]); only unreadable files or
    /// invalid JSON documents fail the load.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;

        let raw: RecordsRaw = serde_json::from_reader(reader).map_err(CatalogError::Json)?;
        let catalog = crate::model::convert::from_raw(raw);
        debug!(
            source = %path.display(),
            records = catalog.len(),
            "parsed source dataset"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::convert::from_raw;
    use crate::raw::RecordsRaw;

    #[test]
    fn source_json_parses_into_catalog() {
        let src = r#"[
            {"company_name":"Rwacof","product":"Coffee","export_to":"Switzerland","net_price":2400,"website":"rwacof.rw"},
            {"company_name":"Sorwathe","product":"Tea","export_to":"","net_price":"1800","website":"info@sorwathe.rw"},
            {"company_name":"","product":"Pyrethrum","net_price":"n/a"}
        ]"#;
        let raw: RecordsRaw = serde_json::from_str(src).unwrap();
        let catalog = from_raw(raw);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.records[0].net_price, Some(2400.0));
        assert_eq!(catalog.records[1].net_price, Some(1800.0));
        assert_eq!(catalog.records[1].export_to, None);
        assert_eq!(catalog.records[2].net_price, None);
    }
}
