// src/agents/population.rs

//! Builds the initial seller and buyer populations for each market type.

use super::buyer::Buyer;
use super::config::{
    CONSTANT_ASKING_PRICE, CONSTANT_CEILING_PRICE, CONSTANT_FLOOR_PRICE, CONSTANT_RATE,
    NORMAL_CEILING_MEAN, NORMAL_CEILING_STD_DEV, NORMAL_FLOOR_MEAN, NORMAL_FLOOR_STD_DEV,
    OPENING_MARKUP, SAMPLED_RATE, UNIFORM_CEILING_HIGH, UNIFORM_CEILING_LOW, UNIFORM_FLOOR_HIGH,
    UNIFORM_FLOOR_LOW,
};
use super::seller::Seller;
use crate::config::{AgentSpec, MarketConfig, MarketType};
use crate::error::{MarketError, Result};
use crate::shared_types::Price;
use rand::Rng;
use rand::distributions::Uniform;
use rand_distr::{Distribution, Normal};

pub struct Population {
    pub sellers: Vec<Seller>,
    pub buyers: Vec<Buyer>,
}

impl Population {
    pub fn build<R: Rng + ?Sized>(
        market_type: MarketType,
        config: &MarketConfig,
        rng: &mut R,
    ) -> Result<Self> {
        match market_type {
            MarketType::Constant => Self::constant(config.n_sellers, config.n_buyers),
            MarketType::Uniform => {
                let floors = Uniform::new(UNIFORM_FLOOR_LOW, UNIFORM_FLOOR_HIGH);
                let ceilings = Uniform::new(UNIFORM_CEILING_LOW, UNIFORM_CEILING_HIGH);
                Self::sampled(config.n_sellers, config.n_buyers, &floors, &ceilings, rng)
            }
            MarketType::Normal => {
                let floors = RoundedNormal::new(NORMAL_FLOOR_MEAN, NORMAL_FLOOR_STD_DEV)?;
                let ceilings = RoundedNormal::new(NORMAL_CEILING_MEAN, NORMAL_CEILING_STD_DEV)?;
                Self::sampled(config.n_sellers, config.n_buyers, &floors, &ceilings, rng)
            }
            MarketType::Custom => Self::custom(&config.sellers, &config.buyers),
        }
    }

    fn constant(n_sellers: usize, n_buyers: usize) -> Result<Self> {
        let sellers = (0..n_sellers)
            .map(|_| Seller::new(CONSTANT_RATE, CONSTANT_FLOOR_PRICE, CONSTANT_ASKING_PRICE))
            .collect::<Result<Vec<_>>>()?;
        let buyers = (0..n_buyers)
            .map(|_| Buyer::new(CONSTANT_RATE, CONSTANT_CEILING_PRICE, CONSTANT_ASKING_PRICE))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sellers, buyers })
    }

    /// All floors are drawn before any ceiling, so a seed reproduces the same
    /// population regardless of how the two counts relate.
    fn sampled<R, F, C>(
        n_sellers: usize,
        n_buyers: usize,
        floors: &F,
        ceilings: &C,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
        F: Distribution<Price>,
        C: Distribution<Price>,
    {
        let floor_prices: Vec<Price> = (0..n_sellers).map(|_| floors.sample(rng)).collect();
        let ceiling_prices: Vec<Price> = (0..n_buyers).map(|_| ceilings.sample(rng)).collect();

        let sellers = floor_prices
            .into_iter()
            .map(|floor| Seller::new(SAMPLED_RATE, floor, floor + OPENING_MARKUP))
            .collect::<Result<Vec<_>>>()?;
        let buyers = ceiling_prices
            .into_iter()
            .map(|ceiling| Buyer::new(SAMPLED_RATE, ceiling, ceiling - OPENING_MARKUP))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sellers, buyers })
    }

    fn custom(sellers: &[AgentSpec], buyers: &[AgentSpec]) -> Result<Self> {
        let sellers = sellers
            .iter()
            .map(|spec| Seller::new(spec.rate, spec.limit_price, spec.asking_price))
            .collect::<Result<Vec<_>>>()?;
        let buyers = buyers
            .iter()
            .map(|spec| Buyer::new(spec.rate, spec.limit_price, spec.asking_price))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sellers, buyers })
    }
}

/// A normal distribution whose samples are rounded to whole prices.
struct RoundedNormal(Normal<f64>);

impl RoundedNormal {
    fn new(mean: f64, std_dev: f64) -> Result<Self> {
        Normal::new(mean, std_dev)
            .map(RoundedNormal)
            .map_err(|e| MarketError::Distribution(e.to_string()))
    }
}

impl Distribution<Price> for RoundedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Price {
        self.0.sample(rng).round() as Price
    }
}
