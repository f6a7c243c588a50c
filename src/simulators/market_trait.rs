// src/simulators/market_trait.rs

use super::matching::MatchingReport;
use crate::error::Result;
use crate::types::RoundOutcome;

/// A trait for any market that advances round by round.
/// This allows for a pluggable simulation engine.
pub trait Marketable {
    /// Runs one full round (reset, match, adjust) and reports how matching ended.
    fn step(&mut self) -> MatchingReport;

    /// Rounds completed so far.
    fn round_index(&self) -> u32;

    /// Outcome of the most recent round, if any round has run.
    fn last_outcome(&self) -> Option<RoundOutcome>;

    /// Rebuilds the initial population and reseeds the generator.
    fn reset(&mut self) -> Result<()>;
}
