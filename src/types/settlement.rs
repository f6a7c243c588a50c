// src/types/settlement.rs

use crate::shared_types::Price;
use serde::{Deserialize, Serialize};

/// How the price of an accepted trade is settled between the two parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// Each side books its own standing asking price. No renegotiation.
    #[default]
    AskingPrices,
    /// Both sides meet at the rounded-down midpoint of their asks.
    Midpoint,
}

/// The price each side books for a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledPrices {
    pub seller_receives: Price,
    pub buyer_pays: Price,
}

impl Settlement {
    /// Settles one unit. The midpoint never drops under the seller's floor or
    /// rises over the buyer's ceiling; the floor wins when the two conflict.
    pub fn settle(
        &self,
        seller_ask: Price,
        seller_floor: Price,
        buyer_ask: Price,
        buyer_ceiling: Price,
    ) -> SettledPrices {
        match self {
            Settlement::AskingPrices => SettledPrices {
                seller_receives: seller_ask,
                buyer_pays: buyer_ask,
            },
            Settlement::Midpoint => {
                let mid = (seller_ask + buyer_ask).div_euclid(2);
                let price = mid.min(buyer_ceiling).max(seller_floor);
                SettledPrices {
                    seller_receives: price,
                    buyer_pays: price,
                }
            }
        }
    }
}
