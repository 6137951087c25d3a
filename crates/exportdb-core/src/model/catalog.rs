// crates/exportdb-core/src/model/catalog.rs
use serde::{Deserialize, Serialize};

/// The master catalog struct.
///
/// Holds every record in dataset order. That order is the baseline for every
/// stable transform downstream (search, filter, sort ties), so the vector is
/// never reordered after load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Master list of all records. Contiguous memory, linear-scan friendly.
    pub records: Vec<Record>,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Exporting company; may be empty in the source data.
    pub company_name: String,
    /// Product name. The only field queries match against, always in its
    /// lowercased form.
    pub product: String,
    /// Destination country. `None` means "unspecified destination".
    pub export_to: Option<String>,
    /// Base price, coerced once at ingestion. `None` when the source value
    /// was missing or not numeric.
    pub net_price: Option<f64>,
    /// Contact hint: a domain, a bare URL fragment, or an email address.
    pub website: Option<String>,
}

impl Catalog {
    /// Total number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Record {
    /// Destination country as a borrowed view.
    #[inline]
    pub fn destination(&self) -> Option<&str> {
        self.export_to.as_deref()
    }

    /// Whether the record carries a usable numeric price.
    #[inline]
    pub fn has_price(&self) -> bool {
        self.net_price.is_some()
    }
}
