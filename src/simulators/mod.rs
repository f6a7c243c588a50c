// src/simulators/mod.rs

pub mod market_trait;
pub mod matching;

pub use market_trait::Marketable;
pub use matching::{MatchingReport, trade};
