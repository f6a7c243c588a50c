// src/types/mod.rs

pub mod acceptance;
pub mod outcome;
pub mod settlement;

pub use acceptance::Acceptance;
pub use outcome::RoundOutcome;
pub use settlement::Settlement;
