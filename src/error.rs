use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("seed {0} is degenerate: it must be nonzero and not a multiple of 2147483647")]
    DegenerateSeed(u64),

    #[error("invalid reference instant: {0}")]
    InvalidInstant(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("unknown side: {0}")]
    UnknownSide(String),

    #[error("unknown order type: {0}")]
    UnknownOrderType(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("unknown result filter: {0}")]
    UnknownResultFilter(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
