// src/bin/simulate.rs

//! Runs one market and prints its summary.
//!
//! Usage: `simulate [config.json]`. Without a path the default config is used.
//! Set `RUST_LOG=debug` to follow the market round by round.

use double_auction::{Market, MarketConfig};
use std::process::ExitCode;

fn run() -> double_auction::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => MarketConfig::from_json_file(path)?,
        None => MarketConfig::default(),
    };

    let mut market = Market::new(config)?;
    market.simulate();

    let report = market.report();
    println!("{}", report);
    if let (Some(first), Some(last)) = (market.history().first(), market.history().last()) {
        println!(
            "\nMean spread: {:.2} after round {} -> {:.2} after round {}",
            first.mean_spread(),
            first.round,
            last.mean_spread(),
            last.round
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
