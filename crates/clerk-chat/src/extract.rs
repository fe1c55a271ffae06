//! Slot extraction: search terms and price bounds.
//!
//! Both extractors are total functions; an empty term string or an
//! absent range is a legal result, never an error.

use std::sync::LazyLock;

use clerk_core::types::PriceRange;
use regex::Regex;

/// Filler words stripped before the remaining tokens become the query.
const STOP_WORDS: &[&str] = &[
    "i", "want", "need", "looking", "for", "find", "search", "show", "me",
];

/// The "around N" bounds extend this far on each side of N. A fixed
/// absolute offset regardless of N's magnitude; the lower bound may go
/// negative, which simply filters nothing out.
const AROUND_MARGIN: f64 = 50.0;

struct PricePatterns {
    under: Regex,
    above: Regex,
    between: Regex,
    around: Regex,
}

static PRICE_PATTERNS: LazyLock<PricePatterns> = LazyLock::new(|| PricePatterns {
    under: Regex::new(r"under (\d+)").expect("Invalid under regex"),
    above: Regex::new(r"above (\d+)").expect("Invalid above regex"),
    between: Regex::new(r"between (\d+) and (\d+)").expect("Invalid between regex"),
    around: Regex::new(r"around (\d+)").expect("Invalid around regex"),
});

/// Extract search terms: lowercase, drop stop words and tokens of length
/// two or less, join survivors with single spaces in input order.
///
/// An empty result signals "no discernible product term".
pub fn extract_terms(message: &str) -> String {
    message
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word) && word.len() > 2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract a price range, testing the patterns in fixed order:
/// under, above, between, around. First match wins; no match is `None`.
pub fn extract_price_range(message: &str) -> Option<PriceRange> {
    let lowered = message.to_lowercase();
    let pats = &*PRICE_PATTERNS;

    if let Some(caps) = pats.under.captures(&lowered) {
        let max = parse_amount(&caps, 1)?;
        return Some(PriceRange::under(max));
    }

    if let Some(caps) = pats.above.captures(&lowered) {
        let min = parse_amount(&caps, 1)?;
        return Some(PriceRange::above(min));
    }

    if let Some(caps) = pats.between.captures(&lowered) {
        let min = parse_amount(&caps, 1)?;
        let max = parse_amount(&caps, 2)?;
        return Some(PriceRange::between(min, max));
    }

    if let Some(caps) = pats.around.captures(&lowered) {
        let price = parse_amount(&caps, 1)?;
        return Some(PriceRange::between(
            price - AROUND_MARGIN,
            price + AROUND_MARGIN,
        ));
    }

    None
}

fn parse_amount(caps: &regex::Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse::<u64>().ok().map(|n| n as f64)
}
