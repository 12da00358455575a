use crate::{
    models::trade::Trade,
    utils::rounding::{percent, round_to},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub pnl: f64,
    pub trades: usize,
    pub win_rate: f64,
}

/// Per-market stats keyed by symbol, in order of first appearance.
pub type MarketBreakdown = IndexMap<String, MarketStats>;

pub fn market_breakdown(trades: &[Trade]) -> MarketBreakdown {
    let mut tallies: IndexMap<&str, (f64, usize, usize)> = IndexMap::new();

    for trade in trades {
        let (pnl, count, wins) = tallies.entry(trade.market.as_str()).or_insert((0.0, 0, 0));
        *pnl += trade.pnl;
        *count += 1;
        if trade.is_win() {
            *wins += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(market, (pnl, count, wins))| {
            let stats = MarketStats {
                pnl: round_to(pnl, 2),
                trades: count,
                win_rate: round_to(percent(wins, count), 0),
            };
            (market.to_string(), stats)
        })
        .collect()
}

/// Markets with the most trades first. Ties keep first-appearance order.
pub fn by_trade_count(breakdown: &MarketBreakdown) -> Vec<(&String, &MarketStats)> {
    let mut sorted: Vec<(&String, &MarketStats)> = breakdown.iter().collect();
    sorted.sort_by(|a, b| b.1.trades.cmp(&a.1.trades));
    sorted
}
