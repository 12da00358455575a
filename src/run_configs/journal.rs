use super::print_json;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use trade_journal::{
    export::csv_export::{export_to_path, write_trades},
    models::trade_query::{net_pnl, TradeQuery},
    utils::rounding::round_to,
    Journal,
};
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportSummary<'a> {
    path: &'a Path,
    rows: usize,
    total_trades: usize,
    net_pnl: f64,
}

/// Applies `query` to the journal and writes the view as CSV, to `export`
/// when given and to stdout otherwise.
pub fn run(journal: &Journal, query: &TradeQuery, export: Option<&Path>) -> Result<()> {
    let view = journal.query(query);

    info!(
        shown = view.len(),
        total = journal.trades().len(),
        "Filtered trade journal"
    );

    match export {
        Some(path) => {
            let rows = export_to_path(&view, path)
                .with_context(|| format!("Unable to export trades to {}", path.display()))?;

            print_json(&ExportSummary {
                path,
                rows,
                total_trades: journal.trades().len(),
                net_pnl: round_to(net_pnl(&view), 2),
            })
        }
        None => {
            write_trades(&view, std::io::stdout().lock())?;
            Ok(())
        }
    }
}
