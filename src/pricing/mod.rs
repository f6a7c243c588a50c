// src/pricing/mod.rs

// The between-rounds price heuristic lives in `adjustment.rs`.
pub mod adjustment;

pub use adjustment::{PriceAnchors, adjust_prices};
