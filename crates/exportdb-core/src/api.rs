// crates/exportdb-core/src/api.rs

//! JSON-serializable views over the internal model.
//!
//! Front ends (the CLI's `--json` mode, or any embedding UI) consume these
//! instead of the storage types, so the internal representation can evolve
//! without breaking the wire shape.

use crate::model::Record;
use crate::present::Page;
use serde::Serialize;

/// Wire view of one catalog record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub company_name: String,
    pub product: String,
    pub export_to: Option<String>,
    pub net_price: Option<f64>,
    pub website: Option<String>,
}

impl From<&Record> for RecordView {
    fn from(r: &Record) -> Self {
        RecordView {
            company_name: r.company_name.clone(),
            product: r.product.clone(),
            export_to: r.export_to.clone(),
            net_price: r.net_price,
            website: r.website.clone(),
        }
    }
}

/// Wire view of one visible result page plus the derived filter options.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub items: Vec<RecordView>,
    pub page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub countries: Vec<String>,
}

impl PageView {
    pub fn new(page: &Page<'_>, countries: Vec<String>) -> Self {
        PageView {
            items: page.items.iter().map(|r| RecordView::from(*r)).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_records: page.total_records,
            countries,
        }
    }
}
