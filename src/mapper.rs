//! Row mapping from FlightRadar24 records to G1000 records
//!
//! Numeric cells are coerced leniently: a bad altitude, speed, track or
//! coordinate only empties that one output cell. Structural problems (a
//! `Position` that is not `lat,lon`, an unparseable `UTC` timestamp) fail
//! the whole file.

use crate::conversion::{coerce_numeric, parse_timestamp, split_position, split_timestamp};
use crate::error::{ConvertError, Result};
use crate::export::{export_to_g1000_csv, ExportReport};
use crate::parser::{parse_flight_file, COLUMN_POSITION, COLUMN_UTC};
use crate::types::{FlightRecord, G1000Record};
use log::{Level, LevelFilter};
use std::path::{Path, PathBuf};

/// Settings handed to a [`RecordMapper`] at construction
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Write outputs here instead of beside each input
    pub output_dir: Option<PathBuf>,
    /// Most verbose level this mapper emits
    pub verbosity: LevelFilter,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            verbosity: LevelFilter::Info,
        }
    }
}

/// Converts FlightRadar24 exports into G1000 flight logs
#[derive(Debug, Clone, Default)]
pub struct RecordMapper {
    config: MapperConfig,
}

impl RecordMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Map input rows to G1000 rows, one for one and in order
    ///
    /// `source` only labels errors.
    pub fn convert(&self, records: &[FlightRecord], source: &Path) -> Result<Vec<G1000Record>> {
        records
            .iter()
            .map(|record| map_record(record, source))
            .collect()
    }

    /// Read, convert and write a single file
    ///
    /// Nothing is written unless every row converted.
    pub fn convert_file(&self, input_path: &Path) -> Result<ExportReport> {
        let records = parse_flight_file(input_path)?;
        self.log(
            Level::Debug,
            format_args!("{}: read {} rows", input_path.display(), records.len()),
        );

        let converted = self.convert(&records, input_path)?;
        let report =
            export_to_g1000_csv(&converted, input_path, self.config.output_dir.as_deref())?;

        if report.created_dir {
            if let Some(dir) = &self.config.output_dir {
                self.log(
                    Level::Debug,
                    format_args!("Created output directory: {}", dir.display()),
                );
            }
        }

        Ok(report)
    }

    /// Convert one file and emit exactly one log line for the outcome
    pub fn process_file(&self, input_path: &Path) -> Result<ExportReport> {
        let result = self.convert_file(input_path);
        match &result {
            Ok(report) => self.log(
                Level::Info,
                format_args!(
                    "Converted file saved to: {} ({} rows)",
                    report.output_path.display(),
                    report.rows
                ),
            ),
            Err(e) => self.log(Level::Error, format_args!("{e}")),
        }
        result
    }

    fn log(&self, level: Level, args: std::fmt::Arguments<'_>) {
        if level <= self.config.verbosity {
            log::log!(level, "{}", args);
        }
    }
}

/// Map one FlightRadar24 row
pub fn map_record(record: &FlightRecord, source: &Path) -> Result<G1000Record> {
    let malformed = |column: &str, value: &str| ConvertError::MalformedField {
        path: source.to_path_buf(),
        column: column.to_string(),
        row: record.row,
        value: value.to_string(),
    };

    let (latitude, longitude) = split_position(&record.position)
        .ok_or_else(|| malformed(COLUMN_POSITION, &record.position))?;

    let (lcl_date, lcl_time) = if record.timestamp.trim().is_empty() {
        (None, None)
    } else {
        let timestamp = parse_timestamp(&record.timestamp)
            .ok_or_else(|| malformed(COLUMN_UTC, &record.timestamp))?;
        let (date, time) = split_timestamp(&timestamp);
        (Some(date), Some(time))
    };

    Ok(G1000Record {
        lcl_date,
        lcl_time,
        latitude,
        longitude,
        alt_msl: coerce_numeric(&record.altitude),
        gnd_spd: coerce_numeric(&record.speed),
        trk: coerce_numeric(&record.direction),
        ..G1000Record::default()
    })
}
