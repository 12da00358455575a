//! Synthetic trading-journal data and the statistics a journal dashboard
//! shows: daily rollups, KPI overview, hourly heatmap, per-market and
//! per-segment breakdowns, and CSV export of filtered trade views.

pub mod config;
pub mod data_sources;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod statistics;
pub mod utils;

pub use config::JournalConfig;
pub use data_sources::dataset::Journal;
pub use error::JournalError;
