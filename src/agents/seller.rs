// src/agents/seller.rs

use super::agent_trait::Trader;
use super::config::PRICE_STEP;
use crate::error::{MarketError, Result};
use crate::pricing::adjustment::PriceAnchors;
use crate::shared_types::{Price, Quantity, Side};
use crate::types::RoundOutcome;
use serde::{Deserialize, Serialize};

/// Produces `supply_per_round` units every round and tries to sell them
/// without ever going under `floor_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub supply_per_round: Quantity,
    pub to_sell: Quantity,
    pub floor_price: Price,
    pub asking_price: Price,
    pub total_supply: Quantity,
    pub sold: Quantity,
    pub profit: i64,
}

impl Seller {
    pub fn new(supply_per_round: Quantity, floor_price: Price, asking_price: Price) -> Result<Self> {
        if asking_price < floor_price {
            return Err(MarketError::InvalidAgent(format!(
                "seller asking price {} is below its floor {}",
                asking_price, floor_price
            )));
        }
        Ok(Self {
            supply_per_round,
            to_sell: supply_per_round,
            floor_price,
            asking_price,
            total_supply: supply_per_round,
            sold: 0,
            profit: 0,
        })
    }

    /// Books one sold unit at `price`.
    pub(crate) fn record_sale(&mut self, price: Price) {
        self.profit += price - self.floor_price;
        self.to_sell -= 1;
        self.sold += 1;
    }
}

impl Trader for Seller {
    fn side(&self) -> Side {
        Side::Seller
    }

    fn round_reset(&mut self, first: bool) {
        if !first {
            self.total_supply += self.supply_per_round;
            self.to_sell = self.supply_per_round;
        }
    }

    fn asking_price(&self) -> Price {
        self.asking_price
    }

    fn remaining(&self) -> Quantity {
        self.to_sell
    }

    fn adjust_price(&mut self, outcome: RoundOutcome, anchors: &PriceAnchors) {
        if self.to_sell > 0 {
            // Unsold stock: undercut, but never below the floor.
            self.asking_price = (self.asking_price - PRICE_STEP).max(self.floor_price);
        } else if self.asking_price == anchors.max_buyer_ask {
            // Already at the best bid seen at the open.
        } else if outcome == RoundOutcome::Sellers {
            self.asking_price += PRICE_STEP;
        }
    }
}
