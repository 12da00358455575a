use crate::{error::JournalError, models::trade::Trade, utils::constants::CSV_HEADER};
use std::{io::Write, path::Path};
use tracing::info;

/// One CSV row per trade, in the column order of `CSV_HEADER`. Tags are
/// joined with `;` so they stay inside a single field.
pub fn trade_record(trade: &Trade) -> [String; 11] {
    [
        trade.date().format("%Y-%m-%d").to_string(),
        trade.market.clone(),
        trade.side.to_string(),
        trade.size.to_string(),
        trade.entry_price.to_string(),
        trade.exit_price.to_string(),
        trade.pnl.to_string(),
        trade.pnl_percent.to_string(),
        trade.duration.to_string(),
        trade.order_type.to_string(),
        trade.tags.join(";"),
    ]
}

pub fn write_trades<W: Write>(trades: &[&Trade], writer: W) -> Result<(), JournalError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for trade in trades {
        wtr.write_record(trade_record(trade))?;
    }
    wtr.flush()?;

    Ok(())
}

pub fn to_csv_string(trades: &[&Trade]) -> Result<String, JournalError> {
    let mut buf = Vec::new();
    write_trades(trades, &mut buf)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the view to `path`, replacing any existing file. Returns the
/// number of trade rows written.
pub fn export_to_path(trades: &[&Trade], path: &Path) -> Result<usize, JournalError> {
    let file = std::fs::File::create(path)?;
    write_trades(trades, file)?;

    info!(path = %path.display(), rows = trades.len(), "Exported trades to CSV");

    Ok(trades.len())
}
