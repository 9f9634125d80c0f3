//! Error types for the FR24 to G1000 conversion
//!
//! Every variant carries the input path so a single log line is enough to
//! tell which file failed and why. Errors are recovered at the per-file
//! boundary by the batch driver.

use std::path::{Path, PathBuf};
use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons a single file could not be converted
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not exist or is not a regular file
    #[error("input file does not exist: {}", path.display())]
    MissingFile { path: PathBuf },

    /// File is empty or has a header but no data rows
    #[error("no data in file: {}", path.display())]
    EmptyInput { path: PathBuf },

    /// A required input column is absent from the header row
    #[error("the input CSV {} is missing the '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A cell that must have a fixed shape could not be parsed
    #[error("malformed '{column}' value {value:?} in {} at row {row}", path.display())]
    MalformedField {
        path: PathBuf,
        column: String,
        row: usize,
        value: String,
    },

    /// Anything else: CSV syntax, I/O while reading or writing
    #[error("an error occurred while converting {}: {source}", path.display())]
    UnclassifiedParseError {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },
}

impl ConvertError {
    /// Path of the input file this error belongs to
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::MissingFile { path }
            | ConvertError::EmptyInput { path }
            | ConvertError::MissingColumn { path, .. }
            | ConvertError::MalformedField { path, .. }
            | ConvertError::UnclassifiedParseError { path, .. } => path.as_path(),
        }
    }

    pub(crate) fn unclassified(path: impl Into<PathBuf>, source: impl Into<BoxedError>) -> Self {
        ConvertError::UnclassifiedParseError {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
