use crate::{
    models::{order_type::OrderType, trade::Trade},
    utils::rounding::{percent, round_to},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypeStats {
    pub order_type: OrderType,
    pub trades: usize,
    pub win_rate: f64,
    pub pnl: f64,
}

/// A trading session as a half-open range of UTC hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub name: &'static str,
    pub start_hour: usize,
    pub end_hour: usize,
}

impl Session {
    pub fn contains(&self, hour: usize) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Rough UTC windows. London and New York overlap from 13:00 to 16:00.
pub const SESSIONS: [Session; 3] = [
    Session {
        name: "Asian",
        start_hour: 0,
        end_hour: 8,
    },
    Session {
        name: "London",
        start_hour: 8,
        end_hour: 16,
    },
    Session {
        name: "New York",
        start_hour: 13,
        end_hour: 21,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub name: String,
    pub start_hour: usize,
    pub end_hour: usize,
    pub trades: usize,
    pub win_rate: f64,
    pub pnl: f64,
}

pub fn order_type_breakdown(trades: &[Trade]) -> Vec<OrderTypeStats> {
    OrderType::ALL
        .iter()
        .map(|order_type| {
            let (count, win_rate, pnl) =
                tally(trades.iter().filter(|t| t.order_type == *order_type));

            OrderTypeStats {
                order_type: *order_type,
                trades: count,
                win_rate,
                pnl,
            }
        })
        .collect()
}

pub fn session_breakdown(trades: &[Trade]) -> Vec<SessionStats> {
    SESSIONS
        .iter()
        .map(|session| {
            let (count, win_rate, pnl) = tally(trades.iter().filter(|t| session.contains(t.hour())));

            SessionStats {
                name: session.name.to_string(),
                start_hour: session.start_hour,
                end_hour: session.end_hour,
                trades: count,
                win_rate,
                pnl,
            }
        })
        .collect()
}

fn tally<'a, I: Iterator<Item = &'a Trade>>(trades: I) -> (usize, f64, f64) {
    let (count, wins, pnl) = trades.fold((0, 0, 0.0), |(count, wins, pnl), t| {
        (count + 1, wins + usize::from(t.is_win()), pnl + t.pnl)
    });

    (count, round_to(percent(wins, count), 0), round_to(pnl, 2))
}
