use serde::Deserialize;

/// Raw catalog record as it comes from the source JSON.
/// NOTE: This type mirrors the external dataset shape, quirks included.
/// We do *not* expose it from the public API.
#[derive(Debug, Deserialize)]
pub struct RecordRaw {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub export_to: Option<String>,
    #[serde(default)]
    pub net_price: Option<PriceRaw>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A price as found in the wild: a JSON number, or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceRaw {
    Number(f64),
    Text(String),
}

impl PriceRaw {
    /// Coerce to a price value. Text parses after trimming; a failed parse
    /// yields `None` and must never abort ingestion of the remaining records.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            PriceRaw::Number(n) => Some(*n),
            PriceRaw::Text(s) => crate::text::parse_opt_f64(Some(s)),
        }
    }
}

pub type RecordsRaw = Vec<RecordRaw>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_number_coerces() {
        assert_eq!(PriceRaw::Number(450.0).to_f64(), Some(450.0));
    }

    #[test]
    fn price_text_coerces_after_trim() {
        assert_eq!(PriceRaw::Text(" 1800 ".into()).to_f64(), Some(1800.0));
        assert_eq!(PriceRaw::Text("12.5".into()).to_f64(), Some(12.5));
    }

    #[test]
    fn price_garbage_becomes_none() {
        assert_eq!(PriceRaw::Text("contact us".into()).to_f64(), None);
        assert_eq!(PriceRaw::Text("".into()).to_f64(), None);
    }

    #[cfg(feature = "json")]
    #[test]
    fn record_deserializes_with_mixed_price_shapes() {
        let src = r#"[
            {"company_name":"A","product":"Tea","export_to":"Kenya","net_price":400,"website":"a.rw"},
            {"company_name":"B","product":"Coffee","net_price":"1250"},
            {"product":"Cocoa","net_price":"n/a"}
        ]"#;
        let raw: RecordsRaw = serde_json::from_str(src).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0].net_price.as_ref().unwrap().to_f64(), Some(400.0));
        assert_eq!(raw[1].net_price.as_ref().unwrap().to_f64(), Some(1250.0));
        assert_eq!(raw[2].net_price.as_ref().unwrap().to_f64(), None);
        assert!(raw[2].company_name.is_none());
    }
}
