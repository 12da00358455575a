pub mod journal;
pub mod overview;
pub mod performance;
pub mod portfolio;

use anyhow::{Context, Result};
use serde::Serialize;

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Unable to serialize report.")?;
    println!("{}", json);

    Ok(())
}
