// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("{0} market type not available")]
    UnknownMarketType(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid agent: {0}")]
    InvalidAgent(String),

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
