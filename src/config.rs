// src/config.rs

//! Construction parameters for a [`Market`](crate::Market).

use crate::error::{MarketError, Result};
use crate::shared_types::{Price, Quantity};
use crate::types::{Acceptance, Settlement};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How the initial floor/ceiling prices of the population are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketType {
    /// Every agent shares the same valuation.
    Constant,
    /// Floors and ceilings drawn uniformly.
    Uniform,
    /// Floors and ceilings drawn from normal distributions and rounded.
    Normal,
    /// Agents supplied explicitly through the config.
    Custom,
}

impl MarketType {
    pub const ALL: [MarketType; 4] = [
        MarketType::Constant,
        MarketType::Uniform,
        MarketType::Normal,
        MarketType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Constant => "constant",
            MarketType::Uniform => "uniform",
            MarketType::Normal => "normal",
            MarketType::Custom => "custom",
        }
    }
}

impl FromStr for MarketType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        MarketType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MarketError::UnknownMarketType(s.to_string()))
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One explicitly configured agent of a `custom` market.
/// `limit_price` is the floor for a seller and the ceiling for a buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub rate: Quantity,
    pub limit_price: Price,
    pub asking_price: Price,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub n_sellers: usize,
    pub n_buyers: usize,
    /// Number of reset / match / adjust cycles.
    pub rounds: u32,
    /// Maximum trading ticks per round.
    pub duration: u32,
    pub market_type: String,
    /// Fixed seed for reproducible runs. Drawn from entropy when absent.
    pub seed: Option<u64>,
    pub settlement: Settlement,
    pub acceptance: Acceptance,
    pub sellers: Vec<AgentSpec>,
    pub buyers: Vec<AgentSpec>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            n_sellers: 10,
            n_buyers: 5,
            rounds: 10,
            duration: 10,
            market_type: MarketType::Uniform.as_str().to_string(),
            seed: None,
            settlement: Settlement::AskingPrices,
            acceptance: Acceptance::SpreadTolerance,
            sellers: Vec::new(),
            buyers: Vec::new(),
        }
    }
}

impl MarketConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// A `custom` market built from explicit agent specs.
    pub fn custom(sellers: Vec<AgentSpec>, buyers: Vec<AgentSpec>, rounds: u32, duration: u32) -> Self {
        Self {
            n_sellers: sellers.len(),
            n_buyers: buyers.len(),
            rounds,
            duration,
            market_type: MarketType::Custom.as_str().to_string(),
            sellers,
            buyers,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Checks everything that can be checked without building agents.
    pub fn validate(&self) -> Result<MarketType> {
        let market_type: MarketType = self.market_type.parse()?;

        if self.rounds == 0 {
            return Err(MarketError::InvalidConfig("rounds must be positive".into()));
        }
        if self.duration == 0 {
            return Err(MarketError::InvalidConfig("duration must be positive".into()));
        }

        match market_type {
            MarketType::Custom => {
                if self.sellers.is_empty() || self.buyers.is_empty() {
                    return Err(MarketError::InvalidConfig(
                        "custom market needs at least one seller and one buyer".into(),
                    ));
                }
            }
            _ => {
                if self.n_sellers == 0 || self.n_buyers == 0 {
                    return Err(MarketError::InvalidConfig(
                        "n_sellers and n_buyers must be positive".into(),
                    ));
                }
            }
        }

        Ok(market_type)
    }
}
