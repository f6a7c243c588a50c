// src/report.rs

//! Structured snapshots of market state, decoupled from how they are printed.

use crate::agents::{Buyer, Seller, Trader};
use crate::shared_types::{Price, Quantity};
use crate::simulators::MatchingReport;
use crate::types::RoundOutcome;
use serde::{Deserialize, Serialize};
use statrs::statistics;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerStats {
    pub asking_price: Price,
    pub floor_price: Price,
    pub sold: Quantity,
    pub total_supply: Quantity,
    pub profit: i64,
}

impl From<&Seller> for SellerStats {
    fn from(seller: &Seller) -> Self {
        Self {
            asking_price: seller.asking_price,
            floor_price: seller.floor_price,
            sold: seller.sold,
            total_supply: seller.total_supply,
            profit: seller.profit,
        }
    }
}

impl fmt::Display for SellerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sold {}/{} for {} profit", self.sold, self.total_supply, self.profit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerStats {
    pub asking_price: Price,
    pub ceiling_price: Price,
    pub bought: Quantity,
    pub total_demand: Quantity,
    pub profit: i64,
}

impl From<&Buyer> for BuyerStats {
    fn from(buyer: &Buyer) -> Self {
        Self {
            asking_price: buyer.asking_price,
            ceiling_price: buyer.ceiling_price,
            bought: buyer.bought,
            total_demand: buyer.total_demand,
            profit: buyer.profit,
        }
    }
}

impl fmt::Display for BuyerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bought {}/{} for {} profit", self.bought, self.total_demand, self.profit)
    }
}

/// Summary statistics of one side's asking prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceMoments {
    pub mean: f64,
    /// Sample standard deviation; zero when fewer than two agents.
    pub std_dev: f64,
    pub min: Price,
    pub max: Price,
}

impl PriceMoments {
    pub fn of<T: Trader>(agents: &[T]) -> Option<Self> {
        let prices: Vec<Price> = agents.iter().map(|a| a.asking_price()).collect();
        let min = *prices.iter().min()?;
        let max = *prices.iter().max()?;
        let values: Vec<f64> = prices.iter().map(|&p| p as f64).collect();
        let std_dev = if values.len() < 2 {
            0.0
        } else {
            statistics::Statistics::std_dev(values.iter())
        };
        Some(Self {
            mean: statistics::Statistics::mean(values.iter()),
            std_dev,
            min,
            max,
        })
    }
}

fn mean_ask<T: Trader>(agents: &[T]) -> f64 {
    if agents.is_empty() {
        return 0.0;
    }
    statistics::Statistics::mean(agents.iter().map(|a| a.asking_price() as f64))
}

/// One line of the per-round history kept by the market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based.
    pub round: u32,
    pub outcome: RoundOutcome,
    pub ticks: u32,
    pub trades: u64,
    /// Mean asks after this round's adjustment.
    pub mean_seller_ask: f64,
    pub mean_buyer_ask: f64,
}

impl RoundRecord {
    pub fn new(round: u32, matching: &MatchingReport, sellers: &[Seller], buyers: &[Buyer]) -> Self {
        Self {
            round,
            outcome: matching.outcome,
            ticks: matching.ticks,
            trades: matching.trades,
            mean_seller_ask: mean_ask(sellers),
            mean_buyer_ask: mean_ask(buyers),
        }
    }

    /// Gap between the average seller and buyer asks. Shrinks as the market converges.
    pub fn mean_spread(&self) -> f64 {
        self.mean_seller_ask - self.mean_buyer_ask
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReport {
    pub rounds_completed: u32,
    pub last_outcome: Option<RoundOutcome>,
    pub sellers: Vec<SellerStats>,
    pub buyers: Vec<BuyerStats>,
    pub seller_prices: Option<PriceMoments>,
    pub buyer_prices: Option<PriceMoments>,
}

impl MarketReport {
    pub fn new(
        rounds_completed: u32,
        last_outcome: Option<RoundOutcome>,
        sellers: &[Seller],
        buyers: &[Buyer],
    ) -> Self {
        Self {
            rounds_completed,
            last_outcome,
            sellers: sellers.iter().map(SellerStats::from).collect(),
            buyers: buyers.iter().map(BuyerStats::from).collect(),
            seller_prices: PriceMoments::of(sellers),
            buyer_prices: PriceMoments::of(buyers),
        }
    }

    /// `(ceiling, bought)` pairs, lowest ceiling first: the realised demand curve.
    pub fn demand_schedule(&self) -> Vec<(Price, Quantity)> {
        let mut schedule: Vec<_> = self.buyers.iter().map(|b| (b.ceiling_price, b.bought)).collect();
        schedule.sort_by_key(|&(ceiling, _)| ceiling);
        schedule
    }

    /// `(floor, sold)` pairs, highest floor first: the realised supply curve.
    pub fn supply_schedule(&self) -> Vec<(Price, Quantity)> {
        let mut schedule: Vec<_> = self.sellers.iter().map(|s| (s.floor_price, s.sold)).collect();
        schedule.sort_by_key(|&(floor, _)| std::cmp::Reverse(floor));
        schedule
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for MarketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seller_asks: Vec<Price> = self.sellers.iter().map(|s| s.asking_price).collect();
        let buyer_asks: Vec<Price> = self.buyers.iter().map(|b| b.asking_price).collect();

        writeln!(f, "Current Asking Prices:")?;
        f.write_str("Sellers: ")?;
        write_list(f, &seller_asks)?;
        f.write_str("\nBuyers: ")?;
        write_list(f, &buyer_asks)?;
        write!(f, "\n\nAfter {} Rounds:\n", self.rounds_completed)?;
        f.write_str("Sellers: ")?;
        write_list(f, &self.sellers)?;
        f.write_str("\nBuyers:  ")?;
        write_list(f, &self.buyers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> MarketReport {
        let mut sellers = vec![Seller::new(10, 25, 30).unwrap(), Seller::new(10, 15, 20).unwrap()];
        let mut buyers = vec![Buyer::new(10, 40, 30).unwrap(), Buyer::new(10, 35, 25).unwrap()];
        sellers[0].record_sale(30);
        buyers[1].record_purchase(25);
        MarketReport::new(1, Some(RoundOutcome::TimeOut), &sellers, &buyers)
    }

    #[test]
    fn test_display_matches_summary_layout() {
        // Arrange
        let report = sample_report();

        // Act
        let text = report.to_string();

        // Assert
        let expected = "Current Asking Prices:\n\
                        Sellers: [30, 20]\n\
                        Buyers: [30, 25]\n\
                        \n\
                        After 1 Rounds:\n\
                        Sellers: [Sold 1/10 for 5 profit, Sold 0/10 for 0 profit]\n\
                        Buyers:  [Bought 0/10 for 0 profit, Bought 1/10 for 10 profit]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_price_moments() {
        let report = sample_report();

        let moments = report.seller_prices.expect("two sellers should have moments");

        assert!((moments.mean - 25.0).abs() < 1e-9);
        assert!((moments.std_dev - 50f64.sqrt()).abs() < 1e-9, "Sample std dev of [30, 20] is sqrt(50).");
        assert_eq!(moments.min, 20);
        assert_eq!(moments.max, 30);
    }

    #[test]
    fn test_single_agent_has_zero_spread_of_prices() {
        let sellers = vec![Seller::new(1, 20, 30).unwrap()];
        let moments = PriceMoments::of(&sellers).unwrap();
        assert_eq!(moments.std_dev, 0.0);
        assert!(PriceMoments::of::<Seller>(&[]).is_none());
    }

    #[test]
    fn test_schedules_are_sorted() {
        let report = sample_report();

        assert_eq!(report.demand_schedule(), vec![(35, 1), (40, 0)]);
        assert_eq!(report.supply_schedule(), vec![(25, 1), (15, 0)]);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = sample_report();

        let json = report.to_json().unwrap();
        let parsed: MarketReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.sellers, report.sellers);
        assert_eq!(parsed.buyers, report.buyers);
        assert_eq!(parsed.last_outcome, Some(RoundOutcome::TimeOut));
        assert!(json.contains("\"time out\""));
    }
}
