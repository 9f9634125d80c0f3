//! Export functionality for G1000 flight logs
//!
//! Computes output paths and writes converted rows as a G1000 CSV file.
//! The whole file is serialized in memory first, so a failed conversion
//! never leaves a partial output file behind.

use crate::error::{ConvertError, Result};
use crate::types::{G1000Record, G1000_HEADERS};
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem
pub const OUTPUT_SUFFIX: &str = "_g1000";

/// Results of a single export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output_path: PathBuf,
    pub rows: usize,
    /// True when the output directory had to be created
    pub created_dir: bool,
}

/// Compute the output path for an input file
///
/// `<stem>_g1000<.ext>` inside `output_dir`, or beside the input when no
/// directory is given.
pub fn compute_export_path(input_path: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "flight".to_string());

    let file_name = match input_path.extension() {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };

    let dir = match output_dir {
        Some(dir) => dir,
        None => input_path.parent().unwrap_or(Path::new("")),
    };
    dir.join(file_name)
}

/// Serialize G1000 rows, header included, to CSV bytes
pub fn render_g1000_csv(records: &[G1000Record]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(G1000_HEADERS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Write converted rows for `input_path` as a G1000 CSV file
///
/// Creates `output_dir` (recursively) when it is given and absent.
pub fn export_to_g1000_csv(
    records: &[G1000Record],
    input_path: &Path,
    output_dir: Option<&Path>,
) -> Result<ExportReport> {
    let output_path = compute_export_path(input_path, output_dir);

    let data = render_g1000_csv(records).map_err(|e| ConvertError::unclassified(input_path, e))?;

    let mut created_dir = false;
    if let Some(dir) = output_dir {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| ConvertError::unclassified(input_path, e))?;
            created_dir = true;
        }
    }

    if let Err(e) = fs::write(&output_path, data) {
        let _ = fs::remove_file(&output_path);
        return Err(ConvertError::unclassified(input_path, e));
    }

    Ok(ExportReport {
        output_path,
        rows: records.len(),
        created_dir,
    })
}
