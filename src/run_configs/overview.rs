use super::print_json;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use trade_journal::{
    models::daily_metric::DailyMetric,
    statistics::{
        market_breakdown::{by_trade_count, MarketBreakdown},
        overview::OverviewStats,
    },
    Journal,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OverviewReport<'a> {
    today: NaiveDate,
    overview: OverviewStats,
    daily_metrics: &'a [DailyMetric],
    market_breakdown: MarketBreakdown,
    /// Symbols with the most trades first.
    most_traded: Vec<String>,
}

fn report(journal: &Journal) -> OverviewReport<'_> {
    let market_breakdown = journal.market_breakdown();
    let most_traded = by_trade_count(&market_breakdown)
        .into_iter()
        .map(|(market, _)| market.clone())
        .collect();

    OverviewReport {
        today: journal.today(),
        overview: journal.overview_stats(),
        daily_metrics: journal.daily_metrics(),
        market_breakdown,
        most_traded,
    }
}

pub fn run(journal: &Journal) -> Result<()> {
    print_json(&report(journal))
}
