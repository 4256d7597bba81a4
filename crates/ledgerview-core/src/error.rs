// File: crates/ledgerview-core/src/error.rs
// Summary: Error taxonomy for loading the metrics dataset.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: column '{column}' is not numeric: {value:?}")]
    NotNumeric {
        row: usize,
        column: &'static str,
        value: String,
    },
}
