// crates/exportdb-core/src/model/convert.rs
use crate::model::catalog::{Catalog, Record};
use crate::raw::RecordRaw;
use tracing::warn;

/// **Standard Converter:** Raw -> Catalog.
///
/// A raw record without a usable product name is a data-integrity violation:
/// it could never match any query, so it is dropped here (with a warning)
/// rather than aborting ingestion of the remaining dataset.
pub fn from_raw(raw_records: Vec<RecordRaw>) -> Catalog {
    let mut catalog = Catalog {
        records: Vec::with_capacity(raw_records.len()),
    };

    for r_raw in raw_records {
        let product = match r_raw.product {
            Some(p) if !p.trim().is_empty() => p,
            _ => {
                warn!(
                    company = r_raw.company_name.as_deref().unwrap_or(""),
                    "skipping record without product name"
                );
                continue;
            }
        };

        catalog.records.push(Record {
            company_name: r_raw.company_name.unwrap_or_default(),
            product,
            export_to: normalize_opt(r_raw.export_to),
            net_price: r_raw.net_price.as_ref().and_then(|p| p.to_f64()),
            website: normalize_opt(r_raw.website),
        });
    }
    catalog
}

/// Empty and whitespace-only values collapse to `None`.
fn normalize_opt(v: Option<String>) -> Option<String> {
    v.and_then(|s| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::PriceRaw;

    fn raw(product: Option<&str>, price: Option<PriceRaw>) -> RecordRaw {
        RecordRaw {
            company_name: Some("Acme Exports".into()),
            product: product.map(Into::into),
            export_to: Some("Kenya".into()),
            net_price: price,
            website: None,
        }
    }

    #[test]
    fn converts_prices_once_at_ingestion() {
        let catalog = from_raw(vec![
            raw(Some("Tea"), Some(PriceRaw::Number(400.0))),
            raw(Some("Coffee"), Some(PriceRaw::Text("1250".into()))),
            raw(Some("Cocoa"), Some(PriceRaw::Text("on request".into()))),
            raw(Some("Maize"), None),
        ]);
        let prices: Vec<Option<f64>> = catalog.records.iter().map(|r| r.net_price).collect();
        assert_eq!(prices, vec![Some(400.0), Some(1250.0), None, None]);
    }

    #[test]
    fn drops_records_without_product() {
        let catalog = from_raw(vec![
            raw(Some("Tea"), None),
            raw(None, None),
            raw(Some("   "), None),
            raw(Some("Coffee"), None),
        ]);
        let products: Vec<&str> = catalog.records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(products, vec!["Tea", "Coffee"]);
    }

    #[test]
    fn blank_optional_fields_collapse_to_none() {
        let mut r = raw(Some("Tea"), None);
        r.export_to = Some("  ".into());
        r.website = Some("".into());
        let catalog = from_raw(vec![r]);
        assert_eq!(catalog.records[0].export_to, None);
        assert_eq!(catalog.records[0].website, None);
    }

    #[test]
    fn preserves_dataset_order() {
        let catalog = from_raw(vec![
            raw(Some("Tea"), None),
            raw(Some("Coffee"), None),
            raw(Some("Cocoa"), None),
        ]);
        let products: Vec<&str> = catalog.records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(products, vec!["Tea", "Coffee", "Cocoa"]);
    }
}
