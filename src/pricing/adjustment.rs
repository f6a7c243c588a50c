// src/pricing/adjustment.rs

use crate::agents::agent_trait::Trader;
use crate::shared_types::Price;
use crate::types::RoundOutcome;
use serde::{Deserialize, Serialize};

/// Opening best prices, captured once before the first round.
///
/// Agents that have cleared their capacity hold their price when it sits
/// exactly on the opposite side's opening best: sellers compare against the
/// highest buyer ask, buyers against the lowest seller ask. The snapshot is
/// never refreshed, so the comparison stays tied to the opening book even as
/// prices drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAnchors {
    pub max_buyer_ask: Price,
    pub min_seller_ask: Price,
}

impl PriceAnchors {
    pub fn snapshot<S: Trader, B: Trader>(sellers: &[S], buyers: &[B]) -> Self {
        Self {
            max_buyer_ask: buyers.iter().map(|b| b.asking_price()).max().unwrap_or(Price::MIN),
            min_seller_ask: sellers.iter().map(|s| s.asking_price()).min().unwrap_or(Price::MAX),
        }
    }
}

/// Runs the heuristic over every agent, each one independently.
pub fn adjust_prices<S: Trader, B: Trader>(
    sellers: &mut [S],
    buyers: &mut [B],
    outcome: RoundOutcome,
    anchors: &PriceAnchors,
) {
    adjust_side(sellers, outcome, anchors);
    adjust_side(buyers, outcome, anchors);
}

fn adjust_side<T: Trader>(agents: &mut [T], outcome: RoundOutcome, anchors: &PriceAnchors) {
    for (i, agent) in agents.iter_mut().enumerate() {
        let before = agent.asking_price();
        agent.adjust_price(outcome, anchors);
        if agent.asking_price() != before {
            log::trace!("{:?} {}: ask {} -> {}", agent.side(), i, before, agent.asking_price());
        }
    }
}
