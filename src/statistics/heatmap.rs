use crate::models::trade::Trade;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;
pub const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Day-of-week by UTC hour grid. Rows start on Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyHeatmap {
    pub pnl: [[f64; HOURS_PER_DAY]; DAYS_PER_WEEK],
    pub counts: [[usize; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl HourlyHeatmap {
    pub fn empty() -> Self {
        Self {
            pnl: [[0.0; HOURS_PER_DAY]; DAYS_PER_WEEK],
            counts: [[0; HOURS_PER_DAY]; DAYS_PER_WEEK],
        }
    }

    pub fn total_count(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Largest absolute cell pnl, the scale a renderer shades against.
    pub fn max_abs_pnl(&self) -> f64 {
        self.pnl
            .iter()
            .flatten()
            .fold(0.0_f64, |max, v| max.max(v.abs()))
    }
}

pub fn hourly_heatmap(trades: &[Trade]) -> HourlyHeatmap {
    trades.iter().fold(HourlyHeatmap::empty(), |mut heatmap, trade| {
        let (day, hour) = (trade.weekday_index(), trade.hour());
        heatmap.pnl[day][hour] += trade.pnl;
        heatmap.counts[day][hour] += 1;
        heatmap
    })
}
