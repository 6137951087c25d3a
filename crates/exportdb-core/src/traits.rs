// crates/exportdb-core/src/traits.rs
use crate::common::CatalogStats;
use crate::model::Record;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a product name.
///
/// This trait centralizes the case-insensitive comparisons based on
/// [`fold_key`]. Implementors provide a `&str` view of their product name
/// via [`ProductMatch::product_str`], and get convenient helpers:
/// - [`ProductMatch::is_product`] — equality on folded form
/// - [`ProductMatch::product_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use exportdb_core::traits::ProductMatch;
///
/// struct Item(&'static str);
/// impl ProductMatch for Item {
///     fn product_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Item("Coffee Beans").product_contains("co"));
/// assert!(Item("TEA").is_product("tea"));
/// ```
pub trait ProductMatch {
    /// Returns the product name used for matching.
    fn product_str(&self) -> &str;

    /// Case-insensitive product name comparison.
    #[inline]
    fn is_product(&self, q: &str) -> bool {
        fold_key(self.product_str()) == fold_key(q)
    }

    /// Case-insensitive substring match.
    ///
    /// An empty query folds to the empty string, which every product
    /// contains, so an empty query matches everything.
    #[inline]
    fn product_contains(&self, q: &str) -> bool {
        fold_key(self.product_str()).contains(&fold_key(q))
    }
}

/// The logic trait: query operations available on the catalog.
pub trait CatalogSearch {
    fn stats(&self) -> CatalogStats;

    /// All records in dataset order.
    fn records(&self) -> &[Record];

    /// Every record whose product name contains `query` as a
    /// case-insensitive substring, dataset order preserved (stable filter,
    /// no reordering, no relevance scoring). An empty query returns the
    /// whole catalog.
    ///
    /// Pure function of the catalog and the query; no side effects.
    fn search(&self, query: &str) -> Vec<&Record>;
}
