use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub total_pnl: f64,
    /// Sum of `total_pnl` for this day and every earlier day.
    pub cumulative_pnl: f64,
    pub volume: f64,
    pub fees_paid: f64,
    /// Whole percent of the day's trades that closed in profit.
    pub win_rate: f64,
    pub trade_count: usize,
}
