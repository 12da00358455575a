use crate::{
    error::JournalError,
    models::{side::Side, trade::Trade},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Winners,
    Losers,
}

impl ResultFilter {
    fn accepts(&self, trade: &Trade) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Winners => trade.is_win(),
            ResultFilter::Losers => !trade.is_win(),
        }
    }
}

impl FromStr for ResultFilter {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ResultFilter::All),
            "winners" => Ok(ResultFilter::Winners),
            "losers" => Ok(ResultFilter::Losers),
            _ => Err(JournalError::UnknownResultFilter(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Timestamp,
    Market,
    Pnl,
    Size,
    Duration,
}

impl SortKey {
    fn compare(&self, a: &Trade, b: &Trade) -> Ordering {
        match self {
            SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortKey::Market => a.market.cmp(&b.market),
            SortKey::Pnl => a.pnl.total_cmp(&b.pnl),
            SortKey::Size => a.size.total_cmp(&b.size),
            SortKey::Duration => a.duration.cmp(&b.duration),
        }
    }
}

impl FromStr for SortKey {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timestamp" | "date" => Ok(SortKey::Timestamp),
            "market" => Ok(SortKey::Market),
            "pnl" => Ok(SortKey::Pnl),
            "size" => Ok(SortKey::Size),
            "duration" => Ok(SortKey::Duration),
            _ => Err(JournalError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(JournalError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Filter and ordering for a view over the journal. The default query
/// keeps every trade, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeQuery {
    pub search: Option<String>,
    pub side: Option<Side>,
    pub result: ResultFilter,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl TradeQuery {
    pub fn new() -> Self {
        TradeQuery::default()
    }

    pub fn search(mut self, search: String) -> Self {
        self.search = Some(search).filter(|s| !s.is_empty());
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn result(mut self, result: ResultFilter) -> Self {
        self.result = result;
        self
    }

    /// Selecting the active key flips the direction, a new key starts
    /// descending.
    pub fn sort_by(mut self, sort_key: SortKey) -> Self {
        if self.sort_key == sort_key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = sort_key;
            self.direction = SortDirection::Desc;
        }
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn apply<'a>(&self, trades: &'a [Trade]) -> Vec<&'a Trade> {
        let mut view: Vec<&Trade> = trades
            .iter()
            .filter(|t| match &self.search {
                Some(query) => t.matches_search(query),
                None => true,
            })
            .filter(|t| self.side.map_or(true, |side| t.side == side))
            .filter(|t| self.result.accepts(t))
            .collect();

        view.sort_by(|a, b| {
            let ordering = self.sort_key.compare(a, b);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        view
    }
}

pub fn net_pnl(view: &[&Trade]) -> f64 {
    view.iter().map(|t| t.pnl).sum()
}
