use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Catalog entities
// =============================================================================

/// A product category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A purchasable catalog item.
///
/// The searchable text fields are name, description, brand, tags, and the
/// category name; inactive products are invisible to every lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub tags: Vec<String>,
    pub rating: f32,
    pub stock: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Construct an active product with the given core fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        brand: impl Into<String>,
        tags: Vec<String>,
        rating: f32,
        stock: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            brand: brand.into(),
            tags,
            rating,
            stock,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// PriceRange
// =============================================================================

/// An optional pair of price bounds, either side may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn under(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn above(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether a price satisfies both bounds.
    pub fn contains(&self, price: f64) -> bool {
        if let Some(min) = self.min {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if price > max {
                return false;
            }
        }
        true
    }
}
