use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trade_journal::{
    config::{parse_date, parse_instant, ConfigOverrides},
    logging,
    models::{
        side::Side,
        trade_query::{ResultFilter, SortDirection, SortKey, TradeQuery},
    },
    Journal, JournalConfig,
};

mod run_configs;

#[derive(Parser)]
#[command(name = "trade_journal")]
#[command(about = "Synthetic trading journal analytics", long_about = None)]
struct Cli {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "JOURNAL_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the values read from the environment.
#[derive(Args)]
struct DatasetArgs {
    /// Seed for the trade generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of trades to generate
    #[arg(long = "trades", global = true)]
    trade_count: Option<usize>,

    /// Reference instant trades are dated back from (RFC 3339)
    #[arg(long, global = true, value_parser = parse_instant)]
    reference: Option<chrono::DateTime<chrono::Utc>>,

    /// Date used for the "today" figures (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<chrono::NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// KPI overview, daily metrics and market breakdown
    Overview,
    /// Filtered trade journal as CSV
    Journal {
        /// Match markets or tags containing this text
        #[arg(long)]
        search: Option<String>,
        /// Only long or short trades
        #[arg(long)]
        side: Option<Side>,
        /// all, winners or losers
        #[arg(long, default_value = "all")]
        result: ResultFilter,
        /// timestamp, market, pnl, size or duration
        #[arg(long, default_value = "timestamp")]
        sort: SortKey,
        /// asc or desc
        #[arg(long, default_value = "desc")]
        direction: SortDirection,
        /// Write the CSV to this path instead of stdout
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
    /// Heatmap, pnl distribution, win/loss and segment breakdowns
    Performance,
    /// Allocations, exposure and risk readout
    Portfolio,
}

impl From<&DatasetArgs> for ConfigOverrides {
    fn from(args: &DatasetArgs) -> Self {
        ConfigOverrides {
            seed: args.seed,
            trade_count: args.trade_count,
            reference_instant: args.reference,
            today: args.today,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let config = ConfigOverrides::from(&cli.dataset).apply(JournalConfig::from_env()?)?;
    let journal = Journal::build(&config)?;

    match cli.command {
        Commands::Overview => run_configs::overview::run(&journal)?,
        Commands::Journal {
            search,
            side,
            result,
            sort,
            direction,
            export,
        } => {
            let mut query = TradeQuery::new().result(result).direction(direction);
            query.sort_key = sort;
            if let Some(search) = search {
                query = query.search(search);
            }
            if let Some(side) = side {
                query = query.side(side);
            }

            run_configs::journal::run(&journal, &query, export.as_deref())?
        }
        Commands::Performance => run_configs::performance::run(&journal)?,
        Commands::Portfolio => run_configs::portfolio::run(&journal)?,
    }

    Ok(())
}
