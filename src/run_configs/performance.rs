use super::print_json;
use anyhow::Result;
use serde::Serialize;
use trade_journal::{
    statistics::{
        distribution::PnlBucket,
        heatmap::{HourlyHeatmap, DAY_LABELS, DAYS_PER_WEEK},
        segments::{OrderTypeStats, SessionStats},
        win_loss::WinLossComparison,
    },
    Journal,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeatmapReport {
    /// Row labels for `grid`, Sunday first.
    days: [&'static str; DAYS_PER_WEEK],
    /// Largest absolute cell pnl, for shading.
    scale: f64,
    grid: HourlyHeatmap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PerformanceReport {
    heatmap: HeatmapReport,
    distribution: Vec<PnlBucket>,
    win_loss: WinLossComparison,
    order_types: Vec<OrderTypeStats>,
    sessions: Vec<SessionStats>,
}

fn report(journal: &Journal) -> PerformanceReport {
    let grid = journal.hourly_heatmap();

    PerformanceReport {
        heatmap: HeatmapReport {
            days: DAY_LABELS,
            scale: grid.max_abs_pnl(),
            grid,
        },
        distribution: journal.pnl_distribution(),
        win_loss: journal.win_loss_comparison(),
        order_types: journal.order_type_breakdown(),
        sessions: journal.session_breakdown(),
    }
}

pub fn run(journal: &Journal) -> Result<()> {
    print_json(&report(journal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_journal::JournalConfig;

    #[test]
    fn test_heatmap_report_has_labels_and_scale() {
        let journal = Journal::build(&JournalConfig::default()).unwrap();
        let report = report(&journal);

        assert_eq!(report.heatmap.days[0], "Sun");
        assert_eq!(report.heatmap.grid.total_count(), 75);
        assert!(report.heatmap.scale > 0.0);
        assert!(report
            .heatmap
            .grid
            .pnl
            .iter()
            .flatten()
            .all(|cell| cell.abs() <= report.heatmap.scale));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["heatmap"]["days"][6], "Sat");
        assert_eq!(json["heatmap"]["grid"]["counts"].as_array().unwrap().len(), 7);
    }
}
