//! Clerk Core crate - shared domain types, error type, configuration.
//!
//! Everything the storefront subsystems have in common lives here:
//! the product/category model, the price-range filter, the top-level
//! error enum, and the TOML configuration loader.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CatalogConfig, ChatConfig, ClerkConfig, GeneralConfig};
pub use error::{ClerkError, Result};
pub use types::{Category, PriceRange, Product};
