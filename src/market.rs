// src/market.rs

use crate::agents::population::Population;
use crate::agents::{Buyer, Seller, Trader};
use crate::config::{MarketConfig, MarketType};
use crate::error::Result;
use crate::pricing::{PriceAnchors, adjust_prices};
use crate::report::{MarketReport, RoundRecord};
use crate::simulators::{Marketable, MatchingReport, trade};
use crate::types::{Acceptance, RoundOutcome, Settlement};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// This is the main simulation engine. It owns both agent populations and the
/// random generator, and drives the reset / match / adjust loop.
pub struct Market {
    sellers: Vec<Seller>,
    buyers: Vec<Buyer>,
    rounds: u32,
    duration: u32,
    acceptance: Acceptance,
    settlement: Settlement,
    round_index: u32,
    last_outcome: Option<RoundOutcome>,
    anchors: Option<PriceAnchors>,
    history: Vec<RoundRecord>,
    rng: StdRng,
    // Kept so `reset` can rebuild the same market.
    market_type: MarketType,
    config: MarketConfig,
}

impl Market {
    /// Validates the config and builds the population. Nothing is created on error.
    pub fn new(config: MarketConfig) -> Result<Self> {
        let market_type = config.validate()?;
        let mut rng = Self::seeded_rng(config.seed);
        let population = Population::build(market_type, &config, &mut rng)?;

        log::info!(
            "built {} market: {} sellers, {} buyers, {} rounds x {} ticks",
            market_type,
            population.sellers.len(),
            population.buyers.len(),
            config.rounds,
            config.duration
        );

        Ok(Self {
            sellers: population.sellers,
            buyers: population.buyers,
            rounds: config.rounds,
            duration: config.duration,
            acceptance: config.acceptance,
            settlement: config.settlement,
            round_index: 0,
            last_outcome: None,
            anchors: None,
            history: Vec::new(),
            rng,
            market_type,
            config,
        })
    }

    fn seeded_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Runs `rounds` rounds. Calling it again continues the same market.
    pub fn simulate(&mut self) {
        log::info!("simulating {} rounds from round {}", self.rounds, self.round_index);
        for _ in 0..self.rounds {
            self.run_round();
        }
        log::info!(
            "finished after {} rounds, last outcome: {}",
            self.round_index,
            self.last_outcome.map_or("none", |o| o.as_str())
        );
    }

    /// One round: reset agents, match, then adjust every price.
    pub fn run_round(&mut self) -> MatchingReport {
        let anchors = *self
            .anchors
            .get_or_insert_with(|| PriceAnchors::snapshot(&self.sellers, &self.buyers));

        let first = self.round_index == 0;
        for seller in self.sellers.iter_mut() {
            seller.round_reset(first);
        }
        for buyer in self.buyers.iter_mut() {
            buyer.round_reset(first);
        }

        let report = trade(
            &mut self.sellers,
            &mut self.buyers,
            self.duration,
            self.acceptance,
            self.settlement,
            &mut self.rng,
        );
        self.last_outcome = Some(report.outcome);

        adjust_prices(&mut self.sellers, &mut self.buyers, report.outcome, &anchors);

        self.round_index += 1;
        let record = RoundRecord::new(self.round_index, &report, &self.sellers, &self.buyers);
        log::debug!(
            "round {}: {} after {} ticks, {} trades",
            record.round,
            record.outcome,
            record.ticks,
            record.trades
        );
        self.history.push(record);

        report
    }

    pub fn report(&self) -> MarketReport {
        MarketReport::new(self.round_index, self.last_outcome, &self.sellers, &self.buyers)
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    pub fn buyers(&self) -> &[Buyer] {
        &self.buyers
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn market_type(&self) -> MarketType {
        self.market_type
    }

    pub fn acceptance(&self) -> Acceptance {
        self.acceptance
    }

    pub fn settlement(&self) -> Settlement {
        self.settlement
    }

    /// The opening snapshot, once the first round has started.
    pub fn anchors(&self) -> Option<PriceAnchors> {
        self.anchors
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }
}

impl Marketable for Market {
    fn step(&mut self) -> MatchingReport {
        self.run_round()
    }

    fn round_index(&self) -> u32 {
        self.round_index
    }

    fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Rebuilds the population from the stored config. A seeded market
    /// replays exactly; an unseeded one draws a fresh population.
    fn reset(&mut self) -> Result<()> {
        *self = Market::new(self.config.clone())?;
        Ok(())
    }
}
