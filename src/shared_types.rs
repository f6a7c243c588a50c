// src/shared_types.rs

use serde::{Deserialize, Serialize};

/// Prices are whole currency units. Signed, because sampled floors can land below zero.
pub type Price = i64;

/// Units of the single traded good.
pub type Quantity = u64;

/// Which side of the market an agent trades on.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Seller,
    Buyer,
}
