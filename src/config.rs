use crate::{
    data_sources::seeded_random::SeededRandom,
    error::JournalError,
    utils::constants::{DEFAULT_REFERENCE_TIME, DEFAULT_SEED, DEFAULT_TODAY, DEFAULT_TRADE_COUNT},
};
use chrono::{DateTime, NaiveDate, Utc};
use std::env;

pub const SEED_VAR: &str = "JOURNAL_SEED";
pub const TRADE_COUNT_VAR: &str = "JOURNAL_TRADE_COUNT";
pub const REFERENCE_INSTANT_VAR: &str = "JOURNAL_REFERENCE_INSTANT";
pub const TODAY_VAR: &str = "JOURNAL_TODAY";

#[derive(Debug, Clone, PartialEq)]
pub struct JournalConfig {
    pub seed: u64,
    pub trade_count: usize,
    /// Instant the synthetic trades are dated back from.
    pub reference_instant: DateTime<Utc>,
    /// Date the "today" figures of the overview are filtered on.
    pub today: NaiveDate,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            trade_count: DEFAULT_TRADE_COUNT,
            reference_instant: DEFAULT_TODAY.and_time(DEFAULT_REFERENCE_TIME).and_utc(),
            today: DEFAULT_TODAY,
        }
    }
}

impl JournalConfig {
    /// Reads the configuration from the environment, loading `.env` first
    /// when present. Unset variables fall back to the defaults.
    ///
    /// Values are parsed but not validated, so a caller can still override
    /// them before calling `validate`.
    pub fn from_env() -> Result<Self, JournalError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, JournalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = JournalConfig::default();

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_number(SEED_VAR, &value)?;
        }
        if let Some(value) = lookup(TRADE_COUNT_VAR) {
            config.trade_count = parse_number(TRADE_COUNT_VAR, &value)?;
        }
        if let Some(value) = lookup(REFERENCE_INSTANT_VAR) {
            config.reference_instant = parse_instant(&value)?;
        }
        if let Some(value) = lookup(TODAY_VAR) {
            config.today = parse_date(&value)?;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), JournalError> {
        SeededRandom::try_new(self.seed).map(|_| ())
    }
}

/// Values that replace the environment configuration, typically from CLI
/// flags. Unset fields keep the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub trade_count: Option<usize>,
    pub reference_instant: Option<DateTime<Utc>>,
    pub today: Option<NaiveDate>,
}

impl ConfigOverrides {
    /// Applies the overrides and validates the result once.
    pub fn apply(&self, mut config: JournalConfig) -> Result<JournalConfig, JournalError> {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(trade_count) = self.trade_count {
            config.trade_count = trade_count;
        }
        if let Some(reference_instant) = self.reference_instant {
            config.reference_instant = reference_instant;
        }
        if let Some(today) = self.today {
            config.today = today;
        }

        config.validate()?;

        Ok(config)
    }
}

pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, JournalError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| JournalError::InvalidInstant(format!("{}: {}", value, e)))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, JournalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| JournalError::InvalidDate(format!("{}: {}", value, e)))
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, JournalError> {
    value
        .trim()
        .parse()
        .map_err(|_| JournalError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
