//! Clerk Catalog crate - the product lookup collaborator.
//!
//! Defines the [`CatalogLookup`] seam the conversational engine queries,
//! an in-memory implementation, composable caching/retry middleware, and
//! a deterministic demo catalog for seeding.

pub mod error;
pub mod middleware;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use middleware::{CachedCatalog, RetryCatalog};
pub use seed::{demo_catalog, demo_catalog_with_limit};
pub use store::{CatalogLookup, MemoryCatalog};
