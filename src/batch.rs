//! Sequential multi-file conversion
//!
//! Each file is read, converted and written before the next one starts.
//! A failed file is recorded and the batch moves on.

use crate::error::ConvertError;
use crate::mapper::RecordMapper;
use std::path::{Path, PathBuf};

/// Final state of one input file
#[derive(Debug)]
pub enum FileOutcome {
    Done {
        input: PathBuf,
        output: PathBuf,
        rows: usize,
    },
    Failed {
        input: PathBuf,
        error: ConvertError,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            FileOutcome::Done { input, .. } | FileOutcome::Failed { input, .. } => input.as_path(),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, FileOutcome::Done { .. })
    }
}

/// Outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_done()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Convert every file in order, never stopping on a failure
pub fn convert_batch(mapper: &RecordMapper, inputs: &[PathBuf]) -> BatchSummary {
    let outcomes = inputs
        .iter()
        .map(|input| match mapper.process_file(input) {
            Ok(report) => FileOutcome::Done {
                input: input.clone(),
                output: report.output_path,
                rows: report.rows,
            },
            Err(error) => FileOutcome::Failed {
                input: input.clone(),
                error,
            },
        })
        .collect();

    BatchSummary { outcomes }
}
