// src/agents/buyer.rs

use super::agent_trait::Trader;
use super::config::PRICE_STEP;
use crate::error::{MarketError, Result};
use crate::pricing::adjustment::PriceAnchors;
use crate::shared_types::{Price, Quantity, Side};
use crate::types::RoundOutcome;
use serde::{Deserialize, Serialize};

/// Wants `demand_per_round` units every round and never pays over `ceiling_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub demand_per_round: Quantity,
    pub to_buy: Quantity,
    pub ceiling_price: Price,
    pub asking_price: Price,
    pub total_demand: Quantity,
    pub bought: Quantity,
    pub profit: i64,
}

impl Buyer {
    pub fn new(demand_per_round: Quantity, ceiling_price: Price, asking_price: Price) -> Result<Self> {
        if asking_price > ceiling_price {
            return Err(MarketError::InvalidAgent(format!(
                "buyer asking price {} is above its ceiling {}",
                asking_price, ceiling_price
            )));
        }
        Ok(Self {
            demand_per_round,
            to_buy: demand_per_round,
            ceiling_price,
            asking_price,
            total_demand: demand_per_round,
            bought: 0,
            profit: 0,
        })
    }

    /// Books one bought unit at `price`.
    pub(crate) fn record_purchase(&mut self, price: Price) {
        self.profit += self.ceiling_price - price;
        self.to_buy -= 1;
        self.bought += 1;
    }
}

impl Trader for Buyer {
    fn side(&self) -> Side {
        Side::Buyer
    }

    fn round_reset(&mut self, first: bool) {
        if !first {
            self.total_demand += self.demand_per_round;
            self.to_buy = self.demand_per_round;
        }
    }

    fn asking_price(&self) -> Price {
        self.asking_price
    }

    fn remaining(&self) -> Quantity {
        self.to_buy
    }

    fn adjust_price(&mut self, outcome: RoundOutcome, anchors: &PriceAnchors) {
        if self.to_buy > 0 {
            self.asking_price = (self.asking_price + PRICE_STEP).min(self.ceiling_price);
        } else if self.asking_price == anchors.min_seller_ask {
            // hold
        } else if outcome == RoundOutcome::Buyers {
            self.asking_price -= PRICE_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> PriceAnchors {
        PriceAnchors {
            max_buyer_ask: 35,
            min_seller_ask: 25,
        }
    }

    #[test]
    fn test_new_rejects_ask_above_ceiling() {
        let result = Buyer::new(10, 40, 41);
        assert!(matches!(result, Err(MarketError::InvalidAgent(_))));
    }

    #[test]
    fn test_reset_cycle() {
        // Arrange
        let mut buyer = Buyer::new(10, 40, 30).unwrap();
        buyer.to_buy = 2;

        // Act
        buyer.round_reset(true);
        let after_first = buyer.to_buy;
        buyer.round_reset(false);

        // Assert
        assert_eq!(after_first, 2, "The first reset must not touch capacity.");
        assert_eq!(buyer.to_buy, 10);
        assert_eq!(buyer.total_demand, 20);
    }

    #[test]
    fn test_record_purchase_books_surplus_under_ceiling() {
        let mut buyer = Buyer::new(10, 40, 30).unwrap();

        buyer.record_purchase(30);

        assert_eq!(buyer.profit, 10);
        assert_eq!(buyer.to_buy, 9);
        assert_eq!(buyer.bought, 1);
    }

    #[test]
    fn test_unfilled_buyer_raises_price_up_to_ceiling() {
        // Arrange
        let mut buyer = Buyer::new(10, 40, 39).unwrap();

        // Act
        for _ in 0..3 {
            buyer.adjust_price(RoundOutcome::TimeOut, &anchors());
        }

        // Assert
        assert_eq!(buyer.asking_price, 40, "Price should stop at the ceiling.");
    }

    #[test]
    fn test_filled_buyer_lowers_when_demand_was_binding() {
        let mut buyer = Buyer::new(10, 40, 30).unwrap();
        buyer.to_buy = 0;

        buyer.adjust_price(RoundOutcome::Buyers, &anchors());

        assert_eq!(buyer.asking_price, 29);
    }

    #[test]
    fn test_filled_buyer_holds_at_anchor() {
        let mut buyer = Buyer::new(10, 40, 25).unwrap();
        buyer.to_buy = 0;

        buyer.adjust_price(RoundOutcome::Buyers, &anchors());

        assert_eq!(buyer.asking_price, 25, "A buyer at the opening best ask should hold.");
    }

    #[test]
    fn test_filled_buyer_holds_when_supply_was_binding() {
        let mut buyer = Buyer::new(10, 40, 30).unwrap();
        buyer.to_buy = 0;

        buyer.adjust_price(RoundOutcome::Sellers, &anchors());

        assert_eq!(buyer.asking_price, 30);
    }
}
