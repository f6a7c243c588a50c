// src/types/acceptance.rs

use crate::agents::config::SPREAD_TOLERANCE;
use crate::shared_types::Price;
use serde::{Deserialize, Serialize};

/// Decides whether a matched seller and buyer trade at their standing asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    /// Trade when `buyer_ask - seller_ask <= SPREAD_TOLERANCE`. A buyer bidding
    /// more than one unit over the seller does not trade, while any buyer
    /// bidding under the seller does.
    #[default]
    SpreadTolerance,
    /// Trade when `seller_ask - buyer_ask <= SPREAD_TOLERANCE`: the book has
    /// crossed, or the seller asks at most one unit above the buyer.
    CrossingBook,
}

impl Acceptance {
    #[inline]
    pub fn accepts(&self, seller_ask: Price, buyer_ask: Price) -> bool {
        match self {
            Acceptance::SpreadTolerance => buyer_ask - seller_ask <= SPREAD_TOLERANCE,
            Acceptance::CrossingBook => seller_ask - buyer_ask <= SPREAD_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_tolerance_caps_the_buyer_premium() {
        let rule = Acceptance::SpreadTolerance;

        assert!(rule.accepts(30, 30), "Equal asks should trade.");
        assert!(rule.accepts(30, 31), "A one-unit premium is within tolerance.");
        assert!(!rule.accepts(30, 32), "A two-unit premium should not trade.");
        assert!(!rule.accepts(20, 30));
        assert!(rule.accepts(35, 30), "A seller above the buyer always trades under this rule.");
    }

    #[test]
    fn test_crossing_book_needs_the_asks_to_meet() {
        let rule = Acceptance::CrossingBook;

        assert!(rule.accepts(30, 30), "Equal asks should trade.");
        assert!(rule.accepts(30, 35), "A crossed book should trade.");
        assert!(rule.accepts(31, 30), "A one-unit gap is within tolerance.");
        assert!(!rule.accepts(32, 30), "A two-unit gap should not trade.");
    }

    #[test]
    fn test_acceptance_parses_snake_case() {
        let parsed: Acceptance = serde_json::from_str("\"crossing_book\"").unwrap();
        assert_eq!(parsed, Acceptance::CrossingBook);
        assert_eq!(Acceptance::default(), Acceptance::SpreadTolerance);
    }
}
