use crate::{
    models::trade::Trade,
    utils::rounding::{percent, round_to},
};
use serde::{Deserialize, Serialize};

/// Side-by-side figures for winning and losing trades. A trade with zero
/// pnl counts as a loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinLossComparison {
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub best_win: f64,
    pub worst_loss: f64,
    pub avg_win_duration: f64,
    pub avg_loss_duration: f64,
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
}

pub fn win_loss_comparison(trades: &[Trade]) -> WinLossComparison {
    let (wins, losses): (Vec<&Trade>, Vec<&Trade>) = trades.iter().partition(|t| t.is_win());

    let best_win = wins.iter().map(|t| t.pnl).reduce(f64::max).unwrap_or(0.0);
    let worst_loss = losses.iter().map(|t| t.pnl).reduce(f64::min).unwrap_or(0.0);
    let (max_win_streak, max_loss_streak) = streaks(trades);

    WinLossComparison {
        wins: wins.len(),
        losses: losses.len(),
        win_rate: round_to(percent(wins.len(), trades.len()), 1),
        avg_win: round_to(mean_of(&wins, |t| t.pnl), 2),
        avg_loss: round_to(mean_of(&losses, |t| t.pnl).abs(), 2),
        best_win,
        worst_loss,
        avg_win_duration: round_to(mean_of(&wins, |t| t.duration as f64), 1),
        avg_loss_duration: round_to(mean_of(&losses, |t| t.duration as f64), 1),
        max_win_streak,
        max_loss_streak,
    }
}

fn mean_of(group: &[&Trade], value: fn(&Trade) -> f64) -> f64 {
    if group.is_empty() {
        return 0.0;
    }

    group.iter().map(|t| value(t)).sum::<f64>() / group.len() as f64
}

/// Longest runs of consecutive wins and losses, walking trades oldest first.
pub fn streaks(trades: &[Trade]) -> (usize, usize) {
    let mut chronological: Vec<&Trade> = trades.iter().collect();
    chronological.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut max_wins = 0;
    let mut max_losses = 0;
    let mut current: Option<(bool, usize)> = None;

    for trade in chronological {
        let win = trade.is_win();
        current = match current {
            Some((last, run)) if last == win => Some((win, run + 1)),
            _ => Some((win, 1)),
        };

        if let Some((last, run)) = current {
            if last {
                max_wins = max_wins.max(run);
            } else {
                max_losses = max_losses.max(run);
            }
        }
    }

    (max_wins, max_losses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::fixtures::trade_with_pnl;

    fn trades() -> Vec<Trade> {
        // Newest first, as the journal stores them.
        let mut trades = vec![
            trade_with_pnl("f", "2026-01-06T08:00:00Z", "SOL-PERP", 5.0),
            trade_with_pnl("e", "2026-01-05T08:00:00Z", "SOL-PERP", -3.0),
            trade_with_pnl("d", "2026-01-04T08:00:00Z", "SOL-PERP", 0.0),
            trade_with_pnl("c", "2026-01-03T08:00:00Z", "SOL-PERP", -6.0),
            trade_with_pnl("b", "2026-01-02T08:00:00Z", "SOL-PERP", 20.0),
            trade_with_pnl("a", "2026-01-01T08:00:00Z", "SOL-PERP", 10.0),
        ];
        trades[0].duration = 60;
        trades[4].duration = 30;
        trades[5].duration = 30;
        trades
    }

    #[test]
    fn test_comparison() {
        let cmp = win_loss_comparison(&trades());

        assert_eq!(cmp.wins, 3);
        assert_eq!(cmp.losses, 3);
        assert_eq!(cmp.win_rate, 50.0);
        assert_eq!(cmp.avg_win, 11.67);
        assert_eq!(cmp.avg_loss, 3.0);
        assert_eq!(cmp.best_win, 20.0);
        assert_eq!(cmp.worst_loss, -6.0);
        assert_eq!(cmp.avg_win_duration, 40.0);
        assert_eq!(cmp.avg_loss_duration, 30.0);
    }

    #[test]
    fn test_streaks_run_oldest_first() {
        // Oldest first: W W L L L W.
        assert_eq!(streaks(&trades()), (2, 3));
    }

    #[test]
    fn test_empty() {
        let cmp = win_loss_comparison(&[]);

        assert_eq!(cmp.wins + cmp.losses, 0);
        assert_eq!(cmp.best_win, 0.0);
        assert_eq!(cmp.worst_loss, 0.0);
        assert_eq!((cmp.max_win_streak, cmp.max_loss_streak), (0, 0));
    }
}
