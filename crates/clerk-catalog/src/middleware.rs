//! Composable middleware around a [`CatalogLookup`].
//!
//! Caching and retry are cross-cutting concerns of the lookup collaborator,
//! not of the conversational engine; they wrap any implementation and
//! expose the same trait, so they stack in any order.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clerk_core::types::{Category, PriceRange, Product};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::store::CatalogLookup;

// =============================================================================
// CachedCatalog
// =============================================================================

/// TTL cache over search results.
///
/// Keys combine the query text with the price bounds so that the same
/// text with different bounds never collides.
pub struct CachedCatalog<C: CatalogLookup> {
    inner: C,
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Vec<Product>)>>,
}

impl<C: CatalogLookup> CachedCatalog<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Drop every cached entry.
    pub fn invalidate(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn cache_key(text: &str, range: Option<&PriceRange>) -> String {
        match range {
            Some(r) => format!("{}|min:{:?}|max:{:?}", text, r.min, r.max),
            None => format!("{}|", text),
        }
    }
}

impl<C: CatalogLookup> CatalogLookup for CachedCatalog<C> {
    fn search(
        &self,
        text: &str,
        range: Option<&PriceRange>,
    ) -> Result<Vec<Product>, CatalogError> {
        let key = Self::cache_key(text, range);

        {
            let entries = self
                .entries
                .lock()
                .map_err(|e| CatalogError::Unavailable(format!("cache lock poisoned: {}", e)))?;
            if let Some((stored_at, products)) = entries.get(&key) {
                if stored_at.elapsed() < self.ttl {
                    debug!(query = %text, "catalog cache hit");
                    return Ok(products.clone());
                }
            }
        }

        let products = self.inner.search(text, range)?;

        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CatalogError::Unavailable(format!("cache lock poisoned: {}", e)))?;
        entries.insert(key, (Instant::now(), products.clone()));
        Ok(products)
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        // Category listings are cheap and rarely queried; pass through.
        self.inner.categories()
    }
}

// =============================================================================
// RetryCatalog
// =============================================================================

/// Bounded retries with exponential backoff for transient lookup failures.
pub struct RetryCatalog<C: CatalogLookup> {
    inner: C,
    max_attempts: u32,
    base_delay: Duration,
}

impl<C: CatalogLookup> RetryCatalog<C> {
    pub fn new(inner: C, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    fn with_retries<T>(
        &self,
        what: &str,
        op: impl Fn() -> Result<T, CatalogError>,
    ) -> Result<T, CatalogError> {
        let mut attempt = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    attempt += 1;
                    if attempt >= self.max_attempts {
                        return Err(e);
                    }
                    let delay = self.base_delay * 2u32.pow(attempt - 1);
                    warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "{} failed, retrying",
                        what
                    );
                    std::thread::sleep(delay);
                }
            }
        }
    }
}

impl<C: CatalogLookup> CatalogLookup for RetryCatalog<C> {
    fn search(
        &self,
        text: &str,
        range: Option<&PriceRange>,
    ) -> Result<Vec<Product>, CatalogError> {
        self.with_retries("catalog search", || self.inner.search(text, range))
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.with_retries("category listing", || self.inner.categories())
    }
}
