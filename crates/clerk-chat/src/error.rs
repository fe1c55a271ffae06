//! Error types for the conversational interface.
//!
//! The engine itself defines no failure modes; these errors belong to the
//! service layer (validation, session persistence) and to the catalog
//! collaborator, passed through.

use clerk_catalog::CatalogError;
use clerk_core::error::ClerkError;

/// Errors from the chat service layer.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ChatError> for ClerkError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Storage(msg) => ClerkError::Session(msg),
            ChatError::Catalog(e) => ClerkError::Catalog(e.to_string()),
            other => ClerkError::Chat(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_display() {
        assert_eq!(ChatError::Disabled.to_string(), "chat is disabled");
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
        let id = Uuid::new_v4();
        assert!(ChatError::SessionNotFound(id).to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: ChatError = CatalogError::Unavailable("down".into()).into();
        assert!(matches!(err, ChatError::Catalog(_)));
    }

    #[test]
    fn test_into_clerk_error() {
        let err: ClerkError = ChatError::EmptyMessage.into();
        assert!(matches!(err, ClerkError::Chat(_)));
        let err: ClerkError = ChatError::Storage("disk full".into()).into();
        assert!(matches!(err, ClerkError::Session(_)));
    }
}
