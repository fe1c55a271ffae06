//! Response composition per intent.
//!
//! The engine is a pure function of (message, catalog state): it holds no
//! mutable state, performs no I/O besides the catalog lookup, and models
//! empty input, absent bounds, and empty results as ordinary data. The
//! only failure it surfaces is a failing lookup, propagated untouched.

use clerk_catalog::{CatalogError, CatalogLookup};
use tracing::debug;

use crate::extract::{extract_price_range, extract_terms};
use crate::intent::classify;
use crate::types::{Action, EngineResponse, Intent};

/// Hard cap on products in a single response.
const MAX_PRODUCTS: usize = 10;

/// The conversational query engine.
///
/// Generic over the catalog seam so the service layer can stack caching
/// and retry middleware without the engine knowing.
pub struct ChatEngine<C: CatalogLookup> {
    catalog: C,
    max_category_suggestions: usize,
}

impl<C: CatalogLookup> ChatEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_suggestion_limit(catalog, 5)
    }

    pub fn with_suggestion_limit(catalog: C, max_category_suggestions: usize) -> Self {
        Self {
            catalog,
            max_category_suggestions,
        }
    }

    /// Process one message into one response.
    pub fn process(&self, message: &str) -> Result<EngineResponse, CatalogError> {
        let intent = classify(message);
        debug!(intent = intent.as_str(), "message classified");

        let mut response = match intent {
            Intent::Greeting => Self::greeting(),
            Intent::SearchProduct => self.search_product(message)?,
            Intent::CategoryBrowse => self.category_browse()?,
            Intent::PriceInquiry => self.price_inquiry(message)?,
            Intent::CartInquiry => Self::cart_inquiry(),
            Intent::Help => Self::help(),
            Intent::Goodbye => Self::goodbye(),
            Intent::Unknown => self.fallback(message)?,
        };

        // The collaborator contract already caps rows, but the response
        // invariant holds even against a misbehaving implementation.
        response.products.truncate(MAX_PRODUCTS);
        Ok(response)
    }

    fn greeting() -> EngineResponse {
        let mut response = EngineResponse::text(
            Intent::Greeting,
            "Hello! I'm your shopping assistant. I can help you find products, \
             check prices, and manage your cart. What are you looking for today?",
        );
        response.suggestions = vec![
            "Show me electronics".to_string(),
            "Find laptops under $1000".to_string(),
            "What's in my cart?".to_string(),
            "Help me find a gift".to_string(),
        ];
        response
    }

    fn search_product(&self, message: &str) -> Result<EngineResponse, CatalogError> {
        let terms = extract_terms(message);
        let range = extract_price_range(message);

        if terms.is_empty() {
            return Ok(EngineResponse::text(
                Intent::SearchProduct,
                "What specific product are you looking for? \
                 You can search by name, brand, or category.",
            ));
        }

        let products = self.catalog.search(&terms, range.as_ref())?;

        if products.is_empty() {
            let mut response = EngineResponse::text(
                Intent::SearchProduct,
                format!(
                    "Sorry, I couldn't find any products matching '{}'. \
                     Try different keywords or browse our categories.",
                    terms
                ),
            );
            response.suggestions = self
                .catalog
                .categories()?
                .into_iter()
                .take(self.max_category_suggestions)
                .map(|c| c.name)
                .collect();
            return Ok(response);
        }

        let mut response = EngineResponse::text(
            Intent::SearchProduct,
            format!("I found {} products matching '{}'", products.len(), terms),
        );
        response.products = products;
        response.actions = vec![Action::ShowProducts];
        Ok(response)
    }

    fn category_browse(&self) -> Result<EngineResponse, CatalogError> {
        let mut response =
            EngineResponse::text(Intent::CategoryBrowse, "Here are our available categories:");
        response.suggestions = self
            .catalog
            .categories()?
            .into_iter()
            .map(|c| c.name)
            .collect();
        response.actions = vec![Action::ShowCategories];
        Ok(response)
    }

    fn price_inquiry(&self, message: &str) -> Result<EngineResponse, CatalogError> {
        match extract_price_range(message) {
            Some(range) => {
                // Empty text matches every active product; only the
                // bounds narrow the result.
                let products = self.catalog.search("", Some(&range))?;
                let mut response = EngineResponse::text(
                    Intent::PriceInquiry,
                    "Here are products in your price range:",
                );
                response.products = products;
                response.actions = vec![Action::ShowProducts];
                Ok(response)
            }
            None => Ok(EngineResponse::text(
                Intent::PriceInquiry,
                "What's your budget? I can show you products in any price range.",
            )),
        }
    }

    fn cart_inquiry() -> EngineResponse {
        let mut response =
            EngineResponse::text(Intent::CartInquiry, "Let me check your cart for you.");
        response.actions = vec![Action::ShowCart];
        response
    }

    fn help() -> EngineResponse {
        let mut response = EngineResponse::text(
            Intent::Help,
            "I can help you with:\n\
             \u{2022} Finding products by name, category, or description\n\
             \u{2022} Filtering by price range\n\
             \u{2022} Adding items to your cart\n\
             \u{2022} Checking your cart contents\n\
             \u{2022} Product recommendations\n\
             \n\
             Just tell me what you're looking for!",
        );
        response.suggestions = vec![
            "Find smartphones".to_string(),
            "Show products under $100".to_string(),
            "Electronics category".to_string(),
            "What's popular?".to_string(),
        ];
        response
    }

    fn goodbye() -> EngineResponse {
        EngineResponse::text(
            Intent::Goodbye,
            "Thank you for shopping with us! Feel free to ask if you need anything else.",
        )
    }

    /// Unclassified messages still get one search attempt, without price
    /// filtering, before the engine admits defeat.
    fn fallback(&self, message: &str) -> Result<EngineResponse, CatalogError> {
        let terms = extract_terms(message);

        if terms.is_empty() {
            let mut response = EngineResponse::text(
                Intent::Unknown,
                "I'm not sure how to help with that. \
                 Try asking about products, prices, or your cart.",
            );
            response.suggestions = vec![
                "Find products".to_string(),
                "Browse categories".to_string(),
                "Check cart".to_string(),
                "Help".to_string(),
            ];
            return Ok(response);
        }

        let products = self.catalog.search(&terms, None)?;

        if products.is_empty() {
            return Ok(EngineResponse::text(
                Intent::Unknown,
                "I'm not sure what you're looking for. Can you be more specific?",
            ));
        }

        let mut response = EngineResponse::text(
            Intent::Unknown,
            "I found some products that might interest you:",
        );
        response.products = products;
        response.actions = vec![Action::ShowProducts];
        Ok(response)
    }
}
