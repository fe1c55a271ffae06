//! Clerk Chat crate - the conversational query engine.
//!
//! Maps free-text storefront messages to catalog queries: intent
//! classification over a fixed pattern table, slot extraction for search
//! terms and price bounds, and response composition per intent. Also hosts
//! the session logger and the service layer that persists each turn.

pub mod engine;
pub mod error;
pub mod extract;
pub mod intent;
pub mod service;
pub mod session;
pub mod types;

pub use engine::ChatEngine;
pub use error::ChatError;
pub use extract::{extract_price_range, extract_terms};
pub use intent::classify;
pub use service::ChatService;
pub use session::SessionStore;
pub use types::{
    Action, ChatMessageRecord, ChatSessionRecord, EngineResponse, Intent, MessageRole,
    ResponseMetadata, SearchRecord,
};
