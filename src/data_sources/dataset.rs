use crate::{
    config::JournalConfig,
    data_sources::{seeded_random::SeededRandom, synthesizer::TradeSynthesizer},
    models::{
        daily_metric::DailyMetric, portfolio_allocation::PortfolioAllocation, trade::Trade,
        trade_query::TradeQuery,
    },
    statistics::{
        daily::daily_metrics,
        distribution::{pnl_distribution, PnlBucket},
        exposure::{exposure, risk_readout, Exposure, RiskMetric},
        heatmap::{hourly_heatmap, HourlyHeatmap},
        market_breakdown::{market_breakdown, MarketBreakdown},
        overview::{overview_stats, OverviewStats},
        segments::{order_type_breakdown, session_breakdown, OrderTypeStats, SessionStats},
        win_loss::{win_loss_comparison, WinLossComparison},
    },
};
use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

/// Read-only snapshot of the journal. Trades and daily metrics are computed
/// once in `build`; every query is a pure reduction over them.
#[derive(Debug, Clone)]
pub struct Journal {
    trades: Vec<Trade>,
    daily_metrics: Vec<DailyMetric>,
    portfolio_allocations: Vec<PortfolioAllocation>,
    today: NaiveDate,
}

impl Journal {
    pub fn build(config: &JournalConfig) -> Result<Self> {
        let rng = SeededRandom::try_new(config.seed)?;
        let trades =
            TradeSynthesizer::new(rng, config.reference_instant, config.trade_count).generate()?;

        let journal = Self::from_trades(trades, config.today);

        info!(
            seed = config.seed,
            trades = journal.trades.len(),
            days = journal.daily_metrics.len(),
            "Built trade journal"
        );

        Ok(journal)
    }

    pub fn from_trades(trades: Vec<Trade>, today: NaiveDate) -> Self {
        let daily_metrics = daily_metrics(&trades);

        Self {
            trades,
            daily_metrics,
            portfolio_allocations: PortfolioAllocation::defaults(),
            today,
        }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn daily_metrics(&self) -> &[DailyMetric] {
        &self.daily_metrics
    }

    pub fn portfolio_allocations(&self) -> &[PortfolioAllocation] {
        &self.portfolio_allocations
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn overview_stats(&self) -> OverviewStats {
        overview_stats(&self.trades, &self.daily_metrics, self.today)
    }

    pub fn hourly_heatmap(&self) -> HourlyHeatmap {
        hourly_heatmap(&self.trades)
    }

    pub fn market_breakdown(&self) -> MarketBreakdown {
        market_breakdown(&self.trades)
    }

    pub fn query(&self, query: &TradeQuery) -> Vec<&Trade> {
        query.apply(&self.trades)
    }

    pub fn pnl_distribution(&self) -> Vec<PnlBucket> {
        pnl_distribution(&self.trades)
    }

    pub fn win_loss_comparison(&self) -> WinLossComparison {
        win_loss_comparison(&self.trades)
    }

    pub fn order_type_breakdown(&self) -> Vec<OrderTypeStats> {
        order_type_breakdown(&self.trades)
    }

    pub fn session_breakdown(&self) -> Vec<SessionStats> {
        session_breakdown(&self.trades)
    }

    pub fn exposure(&self) -> Exposure {
        exposure(&self.trades)
    }

    pub fn risk_readout(&self) -> Vec<RiskMetric> {
        risk_readout(&self.overview_stats())
    }
}
