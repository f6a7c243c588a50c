// src/types/outcome.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a matching round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Every buyer filled its demand for the round.
    #[serde(rename = "buyers")]
    Buyers,
    /// Every seller sold out for the round.
    #[serde(rename = "sellers")]
    Sellers,
    /// The tick budget ran out first.
    #[serde(rename = "time out")]
    TimeOut,
}

impl RoundOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Buyers => "buyers",
            RoundOutcome::Sellers => "sellers",
            RoundOutcome::TimeOut => "time out",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
