// src/agents/mod.rs

pub mod agent_trait;
pub mod buyer;
pub mod config;
pub mod population;
pub mod seller;

pub use agent_trait::Trader;
pub use buyer::Buyer;
pub use seller::Seller;
