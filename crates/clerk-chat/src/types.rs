use clerk_core::types::Product;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Intent
// =============================================================================

/// The classified purpose of a user message.
///
/// Exactly one intent is assigned per message. Variant order here mirrors
/// the classification table order, which is first-match-wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    SearchProduct,
    PriceInquiry,
    CategoryBrowse,
    CartInquiry,
    Help,
    Goodbye,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::SearchProduct => "search_product",
            Intent::PriceInquiry => "price_inquiry",
            Intent::CategoryBrowse => "category_browse",
            Intent::CartInquiry => "cart_inquiry",
            Intent::Help => "help",
            Intent::Goodbye => "goodbye",
            Intent::Unknown => "unknown",
        }
    }

    /// Whether a turn with this intent should be logged as a search.
    pub fn is_search_like(&self) -> bool {
        matches!(self, Intent::SearchProduct | Intent::PriceInquiry)
    }
}

// =============================================================================
// Action
// =============================================================================

/// A hint to the presentation layer about which UI affordance to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ShowProducts,
    ShowCategories,
    ShowCart,
}

// =============================================================================
// EngineResponse
// =============================================================================

/// The engine's sole output: one structured response per message.
///
/// `message` is never empty and `products` never exceeds ten entries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineResponse {
    pub intent: Intent,
    pub message: String,
    pub products: Vec<Product>,
    pub suggestions: Vec<String>,
    pub actions: Vec<Action>,
}

impl EngineResponse {
    /// A response carrying only a message, with empty lists.
    pub fn text(intent: Intent, message: impl Into<String>) -> Self {
        Self {
            intent,
            message: message.into(),
            products: Vec::new(),
            suggestions: Vec::new(),
            actions: Vec::new(),
        }
    }
}

/// The structured metadata attached to a persisted bot turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub intent: Intent,
    pub product_ids: Vec<Uuid>,
    pub suggestions: Vec<String>,
    pub actions: Vec<Action>,
}

impl From<&EngineResponse> for ResponseMetadata {
    fn from(response: &EngineResponse) -> Self {
        Self {
            intent: response.intent,
            product_ids: response.products.iter().map(|p| p.id).collect(),
            suggestions: response.suggestions.clone(),
            actions: response.actions.clone(),
        }
    }
}

// =============================================================================
// Session records
// =============================================================================

/// Who produced a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Bot,
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Bot => "bot",
            MessageRole::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(MessageRole::User),
            "bot" => Some(MessageRole::Bot),
            "system" => Some(MessageRole::System),
            _ => None,
        }
    }
}

/// A persisted chat session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSessionRecord {
    pub id: Uuid,
    pub session_key: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_active: bool,
}

/// One persisted chat message, user or bot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessageRecord {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    /// JSON-encoded [`ResponseMetadata`] on bot turns, absent on user turns.
    pub metadata: Option<String>,
    pub created_at: i64,
}

/// One logged search: query text and how many products it returned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchRecord {
    pub session_id: Uuid,
    pub query: String,
    pub results_count: u32,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serde_tags() {
        assert_eq!(
            serde_json::to_string(&Intent::SearchProduct).unwrap(),
            "\"search_product\""
        );
        assert_eq!(
            serde_json::from_str::<Intent>("\"price_inquiry\"").unwrap(),
            Intent::PriceInquiry
        );
    }

    #[test]
    fn test_intent_as_str_matches_serde() {
        for intent in [
            Intent::Greeting,
            Intent::SearchProduct,
            Intent::PriceInquiry,
            Intent::CategoryBrowse,
            Intent::CartInquiry,
            Intent::Help,
            Intent::Goodbye,
            Intent::Unknown,
        ] {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
    }

    #[test]
    fn test_search_like_intents() {
        assert!(Intent::SearchProduct.is_search_like());
        assert!(Intent::PriceInquiry.is_search_like());
        assert!(!Intent::Greeting.is_search_like());
        assert!(!Intent::Unknown.is_search_like());
    }

    #[test]
    fn test_action_serde_tags() {
        assert_eq!(
            serde_json::to_string(&Action::ShowProducts).unwrap(),
            "\"show_products\""
        );
    }

    #[test]
    fn test_role_round_trip() {
        for role in [MessageRole::User, MessageRole::Bot, MessageRole::System] {
            assert_eq!(MessageRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(MessageRole::parse("unknown"), None);
    }

    #[test]
    fn test_metadata_from_response() {
        let response = EngineResponse {
            intent: Intent::SearchProduct,
            message: "found".into(),
            products: vec![],
            suggestions: vec!["Electronics".into()],
            actions: vec![Action::ShowProducts],
        };
        let meta = ResponseMetadata::from(&response);
        assert_eq!(meta.intent, Intent::SearchProduct);
        assert!(meta.product_ids.is_empty());
        assert_eq!(meta.suggestions, vec!["Electronics".to_string()]);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("show_products"));
    }
}
