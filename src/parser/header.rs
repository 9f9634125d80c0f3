use crate::error::{ConvertError, Result};
use csv::StringRecord;
use std::path::Path;

/// FlightRadar24 column holding the ISO-8601 UTC timestamp
pub const COLUMN_UTC: &str = "UTC";
/// FlightRadar24 column holding `"<lat>,<lon>"`
pub const COLUMN_POSITION: &str = "Position";
/// FlightRadar24 column holding altitude in feet
pub const COLUMN_ALTITUDE: &str = "Altitude";
/// FlightRadar24 column holding ground speed in knots
pub const COLUMN_SPEED: &str = "Speed";
/// FlightRadar24 column holding the track in degrees
pub const COLUMN_DIRECTION: &str = "Direction";

/// Required columns, in the order they are checked
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COLUMN_POSITION,
    COLUMN_UTC,
    COLUMN_ALTITUDE,
    COLUMN_SPEED,
    COLUMN_DIRECTION,
];

/// Pre-computed column indices for the required input fields
///
/// Resolved once from the header row so each data row is read by index
/// instead of by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputColumns {
    pub utc: usize,
    pub position: usize,
    pub altitude: usize,
    pub speed: usize,
    pub direction: usize,
}

impl InputColumns {
    /// Resolve required columns from a header row
    ///
    /// Fails with `EmptyInput` when the header row itself is blank and with
    /// `MissingColumn` naming the first absent column otherwise.
    pub fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        if headers.iter().all(|name| name.trim().is_empty()) {
            return Err(ConvertError::EmptyInput {
                path: path.to_path_buf(),
            });
        }

        let find = |column: &str| -> Result<usize> {
            headers
                .iter()
                .position(|name| name.trim() == column)
                .ok_or_else(|| ConvertError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
        };

        // Check in REQUIRED_COLUMNS order so the reported column is stable
        let mut indices = [0usize; 5];
        for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = find(column)?;
        }
        let [position, utc, altitude, speed, direction] = indices;

        Ok(Self {
            utc,
            position,
            altitude,
            speed,
            direction,
        })
    }
}
