//! Pure reductions over the trade snapshot. None of these mutate their input
//! and none of them fail: empty partitions and zero deviations fall back to 0.

pub mod daily;
pub mod distribution;
pub mod exposure;
pub mod heatmap;
pub mod market_breakdown;
pub mod overview;
pub mod segments;
pub mod win_loss;
