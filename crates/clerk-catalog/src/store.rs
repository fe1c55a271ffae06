//! Catalog lookup trait and the in-memory product store.
//!
//! Search is a case-insensitive substring match across the union of
//! name, description, brand, tags, and category name, restricted to
//! active products and optional price bounds, capped at a fixed row limit.

use clerk_core::types::{Category, PriceRange, Product};
use tracing::debug;

use crate::error::CatalogError;

/// The lookup contract the conversational engine depends on.
///
/// Implementations never mutate catalog state on behalf of the engine.
pub trait CatalogLookup {
    /// Find active products matching `text` in any searchable field,
    /// further restricted by `range` when supplied. Empty text matches
    /// every product, so price-only queries reuse this entry point.
    fn search(&self, text: &str, range: Option<&PriceRange>)
        -> Result<Vec<Product>, CatalogError>;

    /// All categories, in catalog order.
    fn categories(&self) -> Result<Vec<Category>, CatalogError>;
}

/// An in-memory catalog with insertion-ordered products.
pub struct MemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    max_results: usize,
}

impl MemoryCatalog {
    /// Create a catalog with the default 10-row result cap.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self::with_limit(products, categories, 10)
    }

    /// Create a catalog with an explicit result cap.
    pub fn with_limit(
        products: Vec<Product>,
        categories: Vec<Category>,
        max_results: usize,
    ) -> Self {
        Self {
            products,
            categories,
            max_results,
        }
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Whether any searchable field of `product` contains `needle`.
///
/// `needle` must already be lower-cased; an empty needle matches.
fn field_match(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

impl CatalogLookup for MemoryCatalog {
    fn search(
        &self,
        text: &str,
        range: Option<&PriceRange>,
    ) -> Result<Vec<Product>, CatalogError> {
        let needle = text.to_lowercase();

        let results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| field_match(p, &needle))
            .filter(|p| range.map_or(true, |r| r.contains(p.price)))
            .take(self.max_results)
            .cloned()
            .collect();

        debug!(query = %text, count = results.len(), "catalog search");
        Ok(results)
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}
