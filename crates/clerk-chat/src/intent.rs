//! Regex-based intent classification.
//!
//! The intent table is an explicit ordered list, not a map: a message
//! matching patterns from two intents resolves to whichever appears
//! earlier, and that ordering is part of the engine's contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Intent;

/// Ordered (intent, patterns) table. Patterns are matched as substrings
/// against the lower-cased message, in declaration order.
static INTENT_TABLE: LazyLock<Vec<(Intent, Vec<Regex>)>> = LazyLock::new(|| {
    let mk = |pats: &[&str]| -> Vec<Regex> {
        pats.iter()
            .map(|p| Regex::new(p).expect("Invalid intent regex"))
            .collect()
    };

    vec![
        (
            Intent::Greeting,
            mk(&[r"hello", r"hi", r"hey", r"good morning", r"good afternoon"]),
        ),
        (
            Intent::SearchProduct,
            mk(&[
                r"search for",
                r"find",
                r"looking for",
                r"show me",
                r"i want",
                r"need",
            ]),
        ),
        (
            Intent::PriceInquiry,
            mk(&[r"price", r"cost", r"how much", r"expensive", r"cheap"]),
        ),
        (Intent::CategoryBrowse, mk(&[r"category", r"type", r"kind of"])),
        (
            Intent::CartInquiry,
            mk(&[r"cart", r"basket", r"added", r"purchase"]),
        ),
        (
            Intent::Help,
            mk(&[r"help", r"assist", r"support", r"what can you do"]),
        ),
        (
            Intent::Goodbye,
            mk(&[r"bye", r"goodbye", r"see you", r"thanks", r"thank you"]),
        ),
    ]
});

/// Classify a message. First pattern match wins; no match is `Unknown`.
pub fn classify(message: &str) -> Intent {
    let lowered = message.to_lowercase();

    for (intent, patterns) in INTENT_TABLE.iter() {
        for pattern in patterns {
            if pattern.is_match(&lowered) {
                return *intent;
            }
        }
    }

    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Greeting ----

    #[test]
    fn test_hello() {
        assert_eq!(classify("hello there"), Intent::Greeting);
    }

    #[test]
    fn test_hi() {
        assert_eq!(classify("hi"), Intent::Greeting);
    }

    #[test]
    fn test_hey() {
        assert_eq!(classify("hey, anyone around?"), Intent::Greeting);
    }

    #[test]
    fn test_good_morning() {
        assert_eq!(classify("good morning"), Intent::Greeting);
    }

    #[test]
    fn test_good_afternoon() {
        assert_eq!(classify("good afternoon"), Intent::Greeting);
    }

    #[test]
    fn test_greeting_case_insensitive() {
        assert_eq!(classify("HELLO"), Intent::Greeting);
    }

    // ---- Search ----

    #[test]
    fn test_search_for() {
        assert_eq!(classify("search for shoes"), Intent::SearchProduct);
    }

    #[test]
    fn test_looking_for() {
        assert_eq!(classify("looking for a jacket"), Intent::SearchProduct);
    }

    #[test]
    fn test_show_me() {
        assert_eq!(classify("show me laptops under 1000"), Intent::SearchProduct);
    }

    #[test]
    fn test_i_want() {
        assert_eq!(classify("i want a new tablet"), Intent::SearchProduct);
    }

    #[test]
    fn test_need() {
        assert_eq!(classify("need a tent"), Intent::SearchProduct);
    }

    // ---- Price inquiry ----

    #[test]
    fn test_price() {
        assert_eq!(classify("price under 200"), Intent::PriceInquiry);
    }

    #[test]
    fn test_how_much() {
        assert_eq!(classify("how much does a tablet cost"), Intent::PriceInquiry);
    }

    #[test]
    fn test_cheap() {
        assert_eq!(classify("cheap laptops please"), Intent::PriceInquiry);
    }

    // ---- Category browse ----

    #[test]
    fn test_category() {
        assert_eq!(classify("browse by category"), Intent::CategoryBrowse);
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(classify("what kind of products do you sell"), Intent::CategoryBrowse);
    }

    // ---- Cart ----

    #[test]
    fn test_cart() {
        assert_eq!(classify("open my cart"), Intent::CartInquiry);
    }

    #[test]
    fn test_basket() {
        assert_eq!(classify("my basket please"), Intent::CartInquiry);
    }

    // ---- Help ----

    #[test]
    fn test_help() {
        assert_eq!(classify("help"), Intent::Help);
    }

    #[test]
    fn test_support() {
        assert_eq!(classify("support please"), Intent::Help);
    }

    // ---- Goodbye ----

    #[test]
    fn test_bye() {
        assert_eq!(classify("bye now"), Intent::Goodbye);
    }

    #[test]
    fn test_thanks() {
        assert_eq!(classify("ok, see you soon"), Intent::Goodbye);
    }

    // ---- Fallback ----

    #[test]
    fn test_unknown() {
        assert_eq!(classify("xylophone zebra"), Intent::Unknown);
    }

    #[test]
    fn test_empty_string_is_unknown() {
        assert_eq!(classify(""), Intent::Unknown);
    }

    // ---- Table-order precedence ----

    #[test]
    fn test_greeting_beats_search() {
        // Matches both "hello" and "find"; greeting is earlier in the table.
        assert_eq!(classify("hello, find me shoes"), Intent::Greeting);
    }

    #[test]
    fn test_search_beats_price() {
        // "show me" (search) appears before "price" in the table.
        assert_eq!(classify("show me the price list"), Intent::SearchProduct);
    }

    #[test]
    fn test_price_beats_cart() {
        assert_eq!(classify("total cost of my cart"), Intent::PriceInquiry);
    }

    // ---- Substring behavior is deliberate ----

    #[test]
    fn test_substring_match_inside_word() {
        // Patterns match anywhere in the message; "chinos" contains "hi".
        assert_eq!(classify("chinos"), Intent::Greeting);
    }

    #[test]
    fn test_thank_you_is_goodbye() {
        assert_eq!(classify("thank you"), Intent::Goodbye);
    }
}
