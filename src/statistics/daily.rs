use crate::{
    models::{daily_metric::DailyMetric, trade::Trade},
    utils::rounding::{percent, round_to},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Rolls trades up per UTC calendar day, ascending by date.
///
/// The cumulative figure is carried over the rounded day totals, so each
/// day's `cumulative_pnl` is the previous one plus its `total_pnl`.
pub fn daily_metrics(trades: &[Trade]) -> Vec<DailyMetric> {
    let mut days: BTreeMap<NaiveDate, Vec<&Trade>> = BTreeMap::new();

    for trade in trades {
        days.entry(trade.date()).or_default().push(trade);
    }

    let mut cumulative_pnl = 0.0;

    days.into_iter()
        .map(|(date, day)| {
            let total_pnl = round_to(day.iter().map(|t| t.pnl).sum::<f64>(), 2);
            let wins = day.iter().filter(|t| t.is_win()).count();
            cumulative_pnl = round_to(cumulative_pnl + total_pnl, 2);

            DailyMetric {
                date,
                total_pnl,
                cumulative_pnl,
                volume: round_to(day.iter().map(|t| t.size).sum::<f64>(), 0),
                fees_paid: round_to(day.iter().map(|t| t.fees).sum::<f64>(), 2),
                win_rate: round_to(percent(wins, day.len()), 0),
                trade_count: day.len(),
            }
        })
        .collect()
}
