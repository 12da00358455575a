use crate::{
    models::{daily_metric::DailyMetric, trade::Trade},
    utils::{
        constants::TRADING_DAYS_PER_YEAR,
        rounding::{percent, round_to},
    },
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_pnl: f64,
    pub win_rate: f64,
    pub avg_win: f64,
    /// Magnitude, always non-negative.
    pub avg_loss: f64,
    pub profit_factor: f64,
    pub sharpe_ratio: f64,
    pub total_volume: f64,
    pub total_fees: f64,
    pub total_trades: usize,
    pub max_drawdown: f64,
    pub today_pnl: f64,
    pub today_trades: usize,
}

pub fn overview_stats(trades: &[Trade], daily: &[DailyMetric], today: NaiveDate) -> OverviewStats {
    let total_pnl: f64 = trades.iter().map(|t| t.pnl).sum();
    let (wins, losses): (Vec<&Trade>, Vec<&Trade>) = trades.iter().partition(|t| t.is_win());

    let avg_win = mean(wins.iter().map(|t| t.pnl));
    let avg_loss = mean(losses.iter().map(|t| t.pnl)).abs();
    let profit_factor = if avg_loss > 0.0 { avg_win / avg_loss } else { 0.0 };

    let today_trades: Vec<&Trade> = trades.iter().filter(|t| t.date() == today).collect();

    OverviewStats {
        total_pnl: round_to(total_pnl, 2),
        win_rate: round_to(percent(wins.len(), trades.len()), 1),
        avg_win: round_to(avg_win, 2),
        avg_loss: round_to(avg_loss, 2),
        profit_factor: round_to(profit_factor, 2),
        sharpe_ratio: round_to(sharpe_ratio(daily), 2),
        total_volume: round_to(trades.iter().map(|t| t.size).sum::<f64>(), 0),
        total_fees: round_to(trades.iter().map(|t| t.fees).sum::<f64>(), 2),
        total_trades: trades.len(),
        max_drawdown: round_to(max_drawdown(daily), 2),
        today_pnl: round_to(today_trades.iter().map(|t| t.pnl).sum::<f64>(), 2),
        today_trades: today_trades.len(),
    }
}

/// Mean daily pnl over its population standard deviation, scaled by the
/// square root of 252. No risk-free term.
pub fn sharpe_ratio(daily: &[DailyMetric]) -> f64 {
    if daily.is_empty() {
        return 0.0;
    }

    let n = daily.len() as f64;
    let mean_return = daily.iter().map(|d| d.total_pnl).sum::<f64>() / n;
    let variance = daily
        .iter()
        .map(|d| (d.total_pnl - mean_return).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    if std_dev > 0.0 {
        mean_return / std_dev * TRADING_DAYS_PER_YEAR.sqrt()
    } else {
        0.0
    }
}

/// Largest drop from a running peak of cumulative pnl. The peak starts at
/// zero, so a journal that opens with losses draws down immediately.
pub fn max_drawdown(daily: &[DailyMetric]) -> f64 {
    let mut peak = 0.0_f64;
    let mut max_drawdown = 0.0_f64;

    for day in daily {
        peak = peak.max(day.cumulative_pnl);
        max_drawdown = max_drawdown.max(peak - day.cumulative_pnl);
    }

    max_drawdown
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
