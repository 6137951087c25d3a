// crates/exportdb-core/src/text.rs

/// Convert a string into a folded key suitable for matching.
///
/// Matching in this crate is plain case-insensitive substring containment,
/// so folding is exactly Unicode lowercasing. No accent stripping happens:
/// `"Café"` and `"Cafe"` are distinct products.
///
/// # Examples
///
/// ```rust
/// use exportdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Coffee Beans"), "coffee beans");
/// assert!(fold_key("Macadamia Nuts").contains(&fold_key("NUT")));
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// # Examples
///
/// ```rust
/// use exportdb_core::text::equals_folded;
///
/// assert!(equals_folded("TEA", "tea"));
/// assert!(!equals_folded("Tea", "Coffee"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Parses an optional string into an `Option<f64>`.
///
/// - Trims leading and trailing whitespace before parsing.
/// - Returns `None` if the input is `None` or if parsing fails.
pub fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
}
