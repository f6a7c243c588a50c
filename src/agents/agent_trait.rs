// src/agents/agent_trait.rs

use crate::pricing::adjustment::PriceAnchors;
use crate::shared_types::{Price, Quantity, Side};
use crate::types::RoundOutcome;

/// The round-level contract shared by sellers and buyers.
/// The matching round itself works on the concrete types; this trait covers
/// everything the simulation loop does to every agent regardless of side.
pub trait Trader {
    fn side(&self) -> Side;

    /// Refill this round's capacity. The first round keeps the construction-time values.
    fn round_reset(&mut self, first: bool);

    fn asking_price(&self) -> Price;

    /// Units still to trade this round (`to_sell` / `to_buy`).
    fn remaining(&self) -> Quantity;

    /// Move the asking price once the round's matching has finished.
    fn adjust_price(&mut self, outcome: RoundOutcome, anchors: &PriceAnchors);

    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
