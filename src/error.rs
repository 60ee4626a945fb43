use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A single column failed one of the aggregators' shape assumptions.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("column {column}: invalid {field} value {value:?}: {reason}")]
pub struct AggregationError {
    pub column: usize,
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not extract a number from {0:?}")]
    Parse(String),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error("table has no actor columns")]
    EmptyTable,

    #[error("column index {index} out of range for a table with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Could not extract {what} from page: {url}")]
    Extraction { what: &'static str, url: String },
}

impl Error {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
