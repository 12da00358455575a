use super::print_json;
use anyhow::Result;
use serde::Serialize;
use trade_journal::{
    models::portfolio_allocation::PortfolioAllocation,
    statistics::exposure::{allocation_total, fee_impact, Exposure, RiskMetric},
    Journal,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioReport<'a> {
    allocations: &'a [PortfolioAllocation],
    allocation_total: f64,
    exposure: Exposure,
    risk: Vec<RiskMetric>,
    fee_impact: f64,
}

pub fn run(journal: &Journal) -> Result<()> {
    let report = PortfolioReport {
        allocations: journal.portfolio_allocations(),
        allocation_total: allocation_total(journal.portfolio_allocations()),
        exposure: journal.exposure(),
        risk: journal.risk_readout(),
        fee_impact: fee_impact(&journal.overview_stats()),
    };

    print_json(&report)
}
