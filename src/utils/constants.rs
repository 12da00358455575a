use chrono::{NaiveDate, NaiveTime};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TRADE_COUNT: usize = 75;
pub const DEFAULT_TODAY: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 6) {
    Some(date) => date,
    None => panic!("invalid default date"),
};
/// Time of day on `DEFAULT_TODAY` the trades are dated back from, UTC.
pub const DEFAULT_REFERENCE_TIME: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => panic!("invalid default reference time"),
};

/// Market symbols paired with the base price trades are jittered around.
pub const MARKET_CATALOG: [(&str, f64); 8] = [
    ("SOL-PERP", 178.0),
    ("BTC-PERP", 97500.0),
    ("ETH-PERP", 3450.0),
    ("BONK-PERP", 0.000028),
    ("JUP-PERP", 1.12),
    ("WIF-PERP", 2.35),
    ("PYTH-PERP", 0.42),
    ("JTO-PERP", 3.18),
];

pub const TAG_VOCABULARY: [&str; 8] = [
    "scalp", "swing", "breakout", "trend", "reversal", "news", "dca", "momentum",
];

pub const FEE_RATE: f64 = 0.0008;
pub const MAX_DAYS_AGO: f64 = 30.0;
pub const LONG_THRESHOLD: f64 = 0.45;
pub const PRICE_JITTER: f64 = 0.08;
pub const PNL_PERCENT_CENTER: f64 = 0.42;
pub const PNL_PERCENT_SCALE: f64 = 12.0;
pub const MIN_SIZE: f64 = 200.0;
pub const SIZE_SPAN: f64 = 8000.0;
pub const MIN_DURATION: u32 = 3;
pub const DURATION_SPAN: f64 = 600.0;
pub const MAX_TAG_DRAWS: f64 = 3.0;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

pub const CSV_HEADER: [&str; 11] = [
    "Date", "Market", "Side", "Size", "Entry", "Exit", "PnL", "PnL%", "Duration", "Type", "Tags",
];
