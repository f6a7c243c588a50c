// src/agents/config.rs

//! A centralized place for the population and bidding parameters.

use crate::shared_types::{Price, Quantity};

// --- Constant market ---
// Every agent shares the same valuation and trades one unit per round.
pub const CONSTANT_RATE: Quantity = 1;
pub const CONSTANT_FLOOR_PRICE: Price = 20;
pub const CONSTANT_CEILING_PRICE: Price = 40;
pub const CONSTANT_ASKING_PRICE: Price = 30;

// --- Sampled markets (uniform / normal) ---
pub const SAMPLED_RATE: Quantity = 10;
// Sellers open this far above their floor, buyers this far below their ceiling.
pub const OPENING_MARKUP: Price = 10;

// Half-open ranges, [low, high).
pub const UNIFORM_FLOOR_LOW: Price = 10;
pub const UNIFORM_FLOOR_HIGH: Price = 30;
pub const UNIFORM_CEILING_LOW: Price = 20;
pub const UNIFORM_CEILING_HIGH: Price = 40;

pub const NORMAL_FLOOR_MEAN: f64 = 20.0;
pub const NORMAL_FLOOR_STD_DEV: f64 = 10.0;
pub const NORMAL_CEILING_MEAN: f64 = 40.0;
pub const NORMAL_CEILING_STD_DEV: f64 = 10.0;

// --- Matching ---
// Largest spread, in either direction depending on the rule, that still trades.
pub const SPREAD_TOLERANCE: Price = 1;
// Step applied by the price adjustment heuristic each round.
pub const PRICE_STEP: Price = 1;
