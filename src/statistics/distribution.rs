use crate::{models::trade::Trade, utils::rounding::round_to};
use serde::{Deserialize, Serialize};

pub const BUCKET_SIZE: i64 = 100;
pub const BUCKET_RANGE: i64 = 800;
/// Empty buckets inside this band are still reported.
pub const CORE_RANGE: i64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlBucket {
    pub bucket: i64,
    pub label: String,
    pub count: usize,
}

/// Histogram of trade pnl in buckets of 100, ascending. Outliers are clamped
/// into the outermost buckets.
pub fn pnl_distribution(trades: &[Trade]) -> Vec<PnlBucket> {
    let bucket_count = (2 * BUCKET_RANGE / BUCKET_SIZE + 1) as usize;
    let mut counts = vec![0usize; bucket_count];

    for trade in trades {
        let bucket = bucket_for(trade.pnl);
        counts[((bucket + BUCKET_RANGE) / BUCKET_SIZE) as usize] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let bucket = i as i64 * BUCKET_SIZE - BUCKET_RANGE;
            PnlBucket {
                bucket,
                label: format!("${}", bucket),
                count,
            }
        })
        .filter(|b| b.count > 0 || b.bucket.abs() <= CORE_RANGE)
        .collect()
}

/// Nearest bucket, halves rounding up.
pub fn bucket_for(pnl: f64) -> i64 {
    let range = BUCKET_RANGE as f64;
    let clamped = pnl.clamp(-range, range);

    round_to(clamped / BUCKET_SIZE as f64, 0) as i64 * BUCKET_SIZE
}
