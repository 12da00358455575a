use chrono::{NaiveDate, TimeZone, Utc};
use rand::Rng;
use trade_journal::{
    export::csv_export::export_to_path,
    models::{
        order_type::OrderType,
        side::Side,
        trade::Trade,
        trade_query::{net_pnl, ResultFilter, TradeQuery},
    },
    utils::rounding::round_to,
    Journal, JournalConfig,
};

fn default_journal() -> Journal {
    Journal::build(&JournalConfig::default()).unwrap()
}

fn find<'a>(journal: &'a Journal, id: &str) -> &'a Trade {
    journal.trades().iter().find(|t| t.id == id).unwrap()
}

fn assert_trade_invariants(trades: &[Trade]) {
    for trade in trades {
        let expected = round_to(trade.size * trade.pnl_percent / 100.0 - trade.fees, 2);
        assert!(
            (trade.pnl - expected).abs() < 1e-9,
            "{}: pnl {} != {}",
            trade.id,
            trade.pnl,
            expected
        );
        assert_eq!(trade.fees, round_to(trade.size * 0.0008, 2));
        if trade.pnl_percent != 0.0 {
            assert_eq!(trade.gross_pnl() > 0.0, trade.pnl_percent > 0.0, "{}", trade.id);
        }
    }
}

#[test]
fn default_journal_is_deterministic() {
    let a = default_journal();
    let b = default_journal();

    assert_eq!(a.trades(), b.trades());
    assert_eq!(a.daily_metrics(), b.daily_metrics());
}

#[test]
fn default_journal_matches_fixture() {
    let journal = default_journal();
    let trades = journal.trades();

    assert_eq!(trades.len(), 75);
    assert_eq!(journal.daily_metrics().len(), 30);

    let newest = &trades[0];
    assert_eq!(newest.id, "trade-006");
    assert_eq!(newest.timestamp, Utc.with_ymd_and_hms(2026, 2, 6, 8, 22, 0).unwrap());
    assert_eq!(newest.market, "BONK-PERP");
    assert_eq!(newest.side, Side::Short);
    assert_eq!(newest.size, 1028.0);
    assert_eq!(newest.fees, 0.82);
    assert_eq!(newest.pnl, 11.62);
    assert_eq!(newest.pnl_percent, 1.21);
    assert_eq!(newest.duration, 593);
    assert_eq!(newest.order_type, OrderType::Limit);
    assert_eq!(newest.tags, vec!["breakout", "news"]);

    let first = find(&journal, "trade-000");
    assert_eq!(first.timestamp, Utc.with_ymd_and_hms(2026, 2, 5, 23, 16, 0).unwrap());
    assert_eq!(first.market, "ETH-PERP");
    assert_eq!(first.side, Side::Short);
    assert_eq!(first.size, 4298.0);
    assert_eq!(first.entry_price, 3366.1749);
    assert_eq!(first.exit_price, 3141.6346);
    assert_eq!(first.pnl, 283.24);
    assert_eq!(first.pnl_percent, 6.67);
    assert_eq!(first.order_type, OrderType::Market);
    assert!(first.tags.is_empty());

    let oldest = trades.last().unwrap();
    assert_eq!(oldest.id, "trade-057");
    assert_eq!(oldest.market, "PYTH-PERP");
}

#[test]
fn default_journal_daily_metrics_fixture() {
    let journal = default_journal();
    let daily = journal.daily_metrics();

    let first = &daily[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 1, 8).unwrap());
    assert_eq!(first.total_pnl, -345.71);
    assert_eq!(first.cumulative_pnl, -345.71);
    assert_eq!(first.volume, 14418.0);
    assert_eq!(first.fees_paid, 11.53);
    assert_eq!(first.win_rate, 0.0);
    assert_eq!(first.trade_count, 2);

    let last = daily.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2026, 2, 6).unwrap());
    assert_eq!(last.total_pnl, 65.68);
    assert_eq!(last.cumulative_pnl, 3186.37);
    assert_eq!(last.trade_count, 3);
    assert_eq!(last.win_rate, 100.0);
}

#[test]
fn default_journal_overview_fixture() {
    let stats = default_journal().overview_stats();

    assert_eq!(stats.total_pnl, 3186.37);
    assert_eq!(stats.win_rate, 58.7);
    assert_eq!(stats.avg_win, 142.44);
    assert_eq!(stats.avg_loss, 99.38);
    assert_eq!(stats.profit_factor, 1.43);
    assert_eq!(stats.sharpe_ratio, 7.34);
    assert_eq!(stats.total_volume, 298623.0);
    assert_eq!(stats.total_fees, 238.92);
    assert_eq!(stats.total_trades, 75);
    assert_eq!(stats.max_drawdown, 403.5);
    assert_eq!(stats.today_pnl, 65.68);
    assert_eq!(stats.today_trades, 3);
}

#[test]
fn default_journal_breakdowns_fixture() {
    let journal = default_journal();

    let markets: Vec<(String, usize)> = journal
        .market_breakdown()
        .iter()
        .map(|(m, s)| (m.clone(), s.trades))
        .collect();
    assert_eq!(
        markets,
        vec![
            ("BONK-PERP".to_string(), 8),
            ("JUP-PERP".to_string(), 7),
            ("SOL-PERP".to_string(), 9),
            ("ETH-PERP".to_string(), 10),
            ("JTO-PERP".to_string(), 9),
            ("PYTH-PERP".to_string(), 8),
            ("BTC-PERP".to_string(), 12),
            ("WIF-PERP".to_string(), 12),
        ]
    );
    assert_eq!(journal.market_breakdown()["WIF-PERP"].pnl, 836.16);

    let order_types: Vec<usize> = journal
        .order_type_breakdown()
        .iter()
        .map(|s| s.trades)
        .collect();
    assert_eq!(order_types, vec![24, 30, 21]);

    assert_eq!(journal.hourly_heatmap().total_count(), 75);
    assert_eq!(
        journal.pnl_distribution().iter().map(|b| b.count).sum::<usize>(),
        75
    );

    let win_loss = journal.win_loss_comparison();
    assert_eq!(win_loss.wins, 44);
    assert_eq!(win_loss.losses, 31);

    let longs = journal
        .trades()
        .iter()
        .filter(|t| t.side == Side::Long)
        .count();
    assert_eq!(longs, 37);
}

#[test]
fn default_journal_holds_invariants() {
    let journal = default_journal();
    assert_trade_invariants(journal.trades());

    let mut running = 0.0;
    for day in journal.daily_metrics() {
        running = round_to(running + day.total_pnl, 2);
        assert!((day.cumulative_pnl - running).abs() < 1e-6);
    }

    let total: f64 = journal.trades().iter().map(|t| t.pnl).sum();
    assert_eq!(journal.overview_stats().total_pnl, round_to(total, 2));
}

#[test]
fn random_seeds_hold_invariants() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let config = JournalConfig {
            seed: rng.gen_range(1..2_147_483_647),
            trade_count: rng.gen_range(1..300),
            ..JournalConfig::default()
        };
        let journal = Journal::build(&config).unwrap();
        let trades = journal.trades();

        assert_eq!(trades.len(), config.trade_count);
        assert!(trades.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_trade_invariants(trades);

        let days: usize = journal.daily_metrics().iter().map(|d| d.trade_count).sum();
        assert_eq!(days, trades.len());
        assert_eq!(journal.hourly_heatmap().total_count(), trades.len());

        let per_market: usize = journal.market_breakdown().values().map(|s| s.trades).sum();
        assert_eq!(per_market, trades.len());
    }
}

#[test]
fn exports_full_journal_to_csv() {
    let journal = default_journal();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.csv");

    let view = journal.query(&TradeQuery::new());
    let rows = export_to_path(&view, &path).unwrap();
    assert_eq!(rows, 75);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 76);
    assert_eq!(
        lines[0],
        "Date,Market,Side,Size,Entry,Exit,PnL,PnL%,Duration,Type,Tags"
    );
    assert!(lines[1].starts_with("2026-02-06,BONK-PERP,short,1028,"));
    assert!(lines[1].ends_with(",limit,breakout;news"));
}

#[test]
fn exports_filtered_view() {
    let journal = default_journal();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("losers.csv");

    let query = TradeQuery::new()
        .side(Side::Long)
        .result(ResultFilter::Losers);
    let view = journal.query(&query);
    assert!(!view.is_empty());
    assert!(view.iter().all(|t| t.side == Side::Long && t.pnl <= 0.0));
    assert!(net_pnl(&view) < 0.0);

    let rows = export_to_path(&view, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();

    assert_eq!(contents.lines().count(), rows + 1);
    assert!(contents.lines().skip(1).all(|line| line.contains(",long,")));
}
