use crate::models::{order_type::OrderType, side::Side};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A closed trade in the journal. Trades are produced once by the
/// synthesizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub market: String,
    pub side: Side,
    pub size: f64,
    pub entry_price: f64,
    pub exit_price: f64,
    pub fees: f64,
    /// Realized pnl, net of fees.
    pub pnl: f64,
    pub pnl_percent: f64,
    /// Holding time in minutes.
    pub duration: u32,
    pub order_type: OrderType,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.pnl > 0.0
    }

    pub fn gross_pnl(&self) -> f64 {
        self.pnl + self.fees
    }

    /// UTC calendar date of the trade.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Day of week with Sunday as 0.
    pub fn weekday_index(&self) -> usize {
        self.timestamp.weekday().num_days_from_sunday() as usize
    }

    pub fn hour(&self) -> usize {
        self.timestamp.hour() as usize
    }

    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.market.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}
