#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One data row of a FlightRadar24 CSV export
///
/// Cells are kept as the raw text found in the file. Coercion happens
/// when the row is mapped to a [`crate::G1000Record`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightRecord {
    /// 1-based data row number (header excluded)
    pub row: usize,
    /// `UTC` column, ISO-8601 date and time
    pub timestamp: String,
    /// `Position` column, `"<lat>,<lon>"`
    pub position: String,
    /// `Altitude` column, feet
    pub altitude: String,
    /// `Speed` column, knots
    pub speed: String,
    /// `Direction` column, degrees
    pub direction: String,
}
