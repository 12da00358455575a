use crate::{
    models::{portfolio_allocation::PortfolioAllocation, side::Side, trade::Trade},
    statistics::overview::OverviewStats,
    utils::rounding::round_to,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exposure {
    pub long_exposure: f64,
    pub short_exposure: f64,
    pub total_exposure: f64,
    /// Percent of exposure on the long side, 50 when there is none.
    pub long_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetric {
    pub label: String,
    pub value: f64,
    pub description: String,
    pub severity: Severity,
}

impl RiskMetric {
    fn new(label: &str, value: f64, description: &str, severity: Severity) -> Self {
        Self {
            label: label.to_string(),
            value,
            description: description.to_string(),
            severity,
        }
    }
}

pub fn exposure(trades: &[Trade]) -> Exposure {
    let side_total = |side: Side| -> f64 {
        trades
            .iter()
            .filter(|t| t.side == side)
            .map(|t| t.size)
            .sum()
    };

    let long_exposure = side_total(Side::Long);
    let short_exposure = side_total(Side::Short);
    let total_exposure = long_exposure + short_exposure;
    let long_ratio = if total_exposure > 0.0 {
        long_exposure / total_exposure * 100.0
    } else {
        50.0
    };

    Exposure {
        long_exposure,
        short_exposure,
        total_exposure,
        long_ratio: round_to(long_ratio, 1),
    }
}

pub fn risk_readout(stats: &OverviewStats) -> Vec<RiskMetric> {
    vec![
        RiskMetric::new(
            "Max Drawdown",
            stats.max_drawdown,
            "Largest peak-to-trough decline",
            higher_is_riskier(stats.max_drawdown, 1000.0, 2000.0),
        ),
        RiskMetric::new(
            "Sharpe Ratio",
            stats.sharpe_ratio,
            "Risk-adjusted return metric",
            higher_is_safer(stats.sharpe_ratio, 0.5, 1.5),
        ),
        RiskMetric::new(
            "Profit Factor",
            stats.profit_factor,
            "Gross profit / Gross loss",
            higher_is_safer(stats.profit_factor, 1.0, 1.5),
        ),
        RiskMetric::new(
            "Win Rate",
            stats.win_rate,
            "Percentage of winning trades",
            higher_is_safer(stats.win_rate, 45.0, 55.0),
        ),
    ]
}

/// Fees as a percent of the absolute net pnl.
pub fn fee_impact(stats: &OverviewStats) -> f64 {
    if stats.total_pnl == 0.0 {
        return 0.0;
    }

    round_to(stats.total_fees / stats.total_pnl.abs() * 100.0, 1)
}

pub fn allocation_total(allocations: &[PortfolioAllocation]) -> f64 {
    allocations.iter().map(|a| a.value).sum()
}

fn higher_is_riskier(value: f64, medium_above: f64, high_above: f64) -> Severity {
    if value > high_above {
        Severity::High
    } else if value > medium_above {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn higher_is_safer(value: f64, medium_above: f64, low_above: f64) -> Severity {
    if value > low_above {
        Severity::Low
    } else if value > medium_above {
        Severity::Medium
    } else {
        Severity::High
    }
}
