// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod config;
pub mod error;
pub mod market;
pub mod pricing;
pub mod report;
pub mod shared_types;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::{Buyer, Seller, Trader};

// --- From our `market` engine ---
pub use market::Market;

// --- Configuration & errors ---
pub use config::{AgentSpec, MarketConfig, MarketType};
pub use error::{MarketError, Result};

// --- From `simulators` ---
pub use simulators::market_trait::Marketable;
pub use simulators::matching::{MatchingReport, trade};

// --- From `pricing` ---
pub use pricing::PriceAnchors;

// --- Reporting ---
pub use report::{BuyerStats, MarketReport, PriceMoments, RoundRecord, SellerStats};

// --- From `types` / `shared_types` ---
pub use shared_types::{Price, Quantity, Side};
pub use types::{Acceptance, RoundOutcome, Settlement};
