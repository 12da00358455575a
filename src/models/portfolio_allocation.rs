use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub asset: String,
    pub value: f64,
    pub percentage: f64,
}

impl PortfolioAllocation {
    pub fn new(asset: &str, value: f64, percentage: f64) -> Self {
        Self {
            asset: asset.to_string(),
            value,
            percentage,
        }
    }

    /// Hand-authored holdings. Not derived from the trade set.
    pub fn defaults() -> Vec<PortfolioAllocation> {
        vec![
            PortfolioAllocation::new("SOL", 45200.0, 38.2),
            PortfolioAllocation::new("BTC", 28400.0, 24.0),
            PortfolioAllocation::new("ETH", 18900.0, 16.0),
            PortfolioAllocation::new("JUP", 8600.0, 7.3),
            PortfolioAllocation::new("BONK", 6200.0, 5.2),
            PortfolioAllocation::new("Others", 11000.0, 9.3),
        ]
    }
}
