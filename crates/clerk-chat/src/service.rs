//! Chat service: the inbound surface that wires engine and session logger.
//!
//! Validates the incoming message, resolves the session, persists the
//! user turn, invokes the engine, then persists the bot turn (with
//! structured metadata) and a search record for search-like intents.
//! The engine's output passes through unmodified.

use clerk_catalog::CatalogLookup;
use clerk_core::config::ChatConfig;
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::ChatEngine;
use crate::error::ChatError;
use crate::session::SessionStore;
use crate::types::{ChatMessageRecord, EngineResponse, MessageRole, ResponseMetadata};

/// Coordinates one chat turn end to end.
pub struct ChatService<C: CatalogLookup> {
    engine: ChatEngine<C>,
    store: SessionStore,
    config: ChatConfig,
}

impl<C: CatalogLookup> ChatService<C> {
    pub fn new(engine: ChatEngine<C>, store: SessionStore, config: ChatConfig) -> Self {
        Self {
            engine,
            store,
            config,
        }
    }

    /// Handle an incoming chat message.
    ///
    /// `session_id` pins an existing session; otherwise the active session
    /// for `session_key` is used or created. Returns the engine response
    /// and the session the turn was logged under.
    pub fn handle_message(
        &self,
        session_key: &str,
        session_id: Option<Uuid>,
        message: &str,
    ) -> Result<(EngineResponse, Uuid), ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.len() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        let session = match session_id {
            Some(id) => self
                .store
                .get_session(id)?
                .ok_or(ChatError::SessionNotFound(id))?,
            None => self.store.get_or_create_session(session_key)?,
        };

        // The user turn goes in first so a failing lookup cannot lose it.
        self.store
            .append_message(session.id, MessageRole::User, message, None)?;

        let response = self.engine.process(message)?;
        debug!(
            intent = response.intent.as_str(),
            products = response.products.len(),
            "engine response composed"
        );

        let metadata = serde_json::to_string(&ResponseMetadata::from(&response))
            .map_err(|e| ChatError::Storage(format!("metadata encode: {}", e)))?;
        self.store.append_message(
            session.id,
            MessageRole::Bot,
            &response.message,
            Some(&metadata),
        )?;

        if response.intent.is_search_like() {
            self.store
                .log_search(session.id, message, response.products.len() as u32)?;
            info!(
                session = %session.id,
                query = message,
                results = response.products.len(),
                "search logged"
            );
        }

        Ok((response, session.id))
    }

    /// Replay a session's transcript, oldest first.
    pub fn history(&self, session_id: Uuid) -> Result<Vec<ChatMessageRecord>, ChatError> {
        self.store.recent_messages(session_id, self.config.history_limit)
    }

    /// Reset the conversation for a session key; the next message starts
    /// a fresh session.
    pub fn reset(&self, session_key: &str) -> Result<(), ChatError> {
        self.store.deactivate(session_key)
    }
}
