use crate::error::JournalError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// Exit price that realizes `pnl_percent` on a position entered at
    /// `entry_price`. Shorts profit when the price falls.
    pub fn exit_price(&self, entry_price: f64, pnl_percent: f64) -> f64 {
        match self {
            Side::Long => entry_price * (1.0 + pnl_percent / 100.0),
            Side::Short => entry_price * (1.0 - pnl_percent / 100.0),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Long => write!(f, "long"),
            Side::Short => write!(f, "short"),
        }
    }
}

impl FromStr for Side {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(Side::Long),
            "short" => Ok(Side::Short),
            _ => Err(JournalError::UnknownSide(s.to_string())),
        }
    }
}
