//! Error types for catalog lookups.

use clerk_core::error::ClerkError;

/// Errors from the catalog collaborator.
///
/// The conversational engine never catches these; a failing lookup
/// propagates to the calling layer untouched.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("catalog query failed: {0}")]
    Query(String),
}

impl From<CatalogError> for ClerkError {
    fn from(err: CatalogError) -> Self {
        ClerkError::Catalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CatalogError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "catalog unavailable: connection refused");
    }

    #[test]
    fn test_into_clerk_error() {
        let err: ClerkError = CatalogError::Query("bad filter".into()).into();
        assert!(matches!(err, ClerkError::Catalog(_)));
        assert!(err.to_string().contains("bad filter"));
    }
}
