// src/simulators/matching.rs

//! One matching round: random one-to-one pairing of sellers and buyers,
//! repeated tick after tick until one side is exhausted or time runs out.

use crate::agents::{Buyer, Seller, Trader};
use crate::types::{Acceptance, RoundOutcome, Settlement};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// What a matching round reports back to the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingReport {
    pub outcome: RoundOutcome,
    /// Ticks started before the round ended.
    pub ticks: u32,
    /// Units traded. Every trade moves exactly one unit from one seller to one buyer.
    pub trades: u64,
}

fn buyers_exhausted(buyers: &[Buyer]) -> bool {
    buyers.iter().all(Trader::is_exhausted)
}

fn sellers_exhausted(sellers: &[Seller]) -> bool {
    sellers.iter().all(Trader::is_exhausted)
}

/// Runs up to `duration` trading ticks over the agents.
///
/// Each tick draws fresh permutations of both sides and walks the sellers in
/// order, handing each one the next buyer that still wants goods. The buyer
/// cursor is shared by all sellers of the tick and moves on after every
/// seller that reaches a buyer, including a sold-out seller, which meets the
/// buyer without trading. Demand exhaustion is checked before every seller
/// and wins ties; supply exhaustion is checked once the tick is over.
pub fn trade<R: Rng + ?Sized>(
    sellers: &mut [Seller],
    buyers: &mut [Buyer],
    duration: u32,
    acceptance: Acceptance,
    settlement: Settlement,
    rng: &mut R,
) -> MatchingReport {
    let mut buyer_order: Vec<usize> = (0..buyers.len()).collect();
    let mut seller_order: Vec<usize> = (0..sellers.len()).collect();
    let mut trades = 0u64;

    for tick in 1..=duration {
        buyer_order.shuffle(rng);
        seller_order.shuffle(rng);

        let mut cursor = 0;
        for &s in &seller_order {
            if buyers_exhausted(buyers) {
                return MatchingReport {
                    outcome: RoundOutcome::Buyers,
                    ticks: tick,
                    trades,
                };
            }

            while cursor < buyer_order.len() && buyers[buyer_order[cursor]].to_buy == 0 {
                cursor += 1;
            }
            let Some(&b) = buyer_order.get(cursor) else {
                // No buyer left this tick for the remaining sellers.
                continue;
            };
            let seller = &mut sellers[s];
            let buyer = &mut buyers[b];

            if seller.to_sell > 0 && acceptance.accepts(seller.asking_price, buyer.asking_price) {
                let settled = settlement.settle(
                    seller.asking_price,
                    seller.floor_price,
                    buyer.asking_price,
                    buyer.ceiling_price,
                );
                seller.record_sale(settled.seller_receives);
                buyer.record_purchase(settled.buyer_pays);
                trades += 1;
                log::trace!(
                    "tick {}: seller {} -> buyer {} (ask {} / bid {})",
                    tick,
                    s,
                    b,
                    seller.asking_price,
                    buyer.asking_price
                );
            }
            cursor += 1;
        }

        if sellers_exhausted(sellers) {
            return MatchingReport {
                outcome: RoundOutcome::Sellers,
                ticks: tick,
                trades,
            };
        }
    }

    // Demand may have run dry on the very last seller of the last tick.
    let outcome = if buyers_exhausted(buyers) {
        RoundOutcome::Buyers
    } else {
        RoundOutcome::TimeOut
    };
    MatchingReport {
        outcome,
        ticks: duration,
        trades,
    }
}
