use crate::conversion::format_numeric;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Garmin G1000 flight log header, in file order
pub const G1000_HEADERS: [&str; 63] = [
    "Lcl Date", "Lcl Time", "UTCOfst", "AtvWpt", "Latitude", "Longitude", "AltB", "BaroA",
    "AltMSL", "OAT", "IAS", "GndSpd", "VSpd", "Pitch", "Roll", "LatAc", "NormAc", "HDG", "TRK",
    "volt1", "FQtyL", "FQtyR", "E1 FFlow", "E1 FPres", "E1 OilT", "E1 OilP", "E1 MAP", "E1 RPM",
    "E1 CHT1", "E1 CHT2", "E1 CHT3", "E1 CHT4", "E1 EGT1", "E1 EGT2", "E1 EGT3", "E1 EGT4",
    "AltGPS", "TAS", "HSIS", "CRS", "NAV1", "NAV2", "COM1", "COM2", "HCDI", "VCDI", "WndSpd",
    "WndDr", "WptDst", "WptBrg", "MagVar", "AfcsOn", "RollM", "PitchM", "RollC", "PichC", "VSpdG",
    "GPSfix", "HAL", "VAL", "HPLwas", "HPLfd", "VPLwas",
];

/// Standard barometric setting written to every row (inHg)
pub const DEFAULT_BARO_INHG: f64 = 29.92;
/// Bus voltage written to every row
pub const DEFAULT_VOLT1: f64 = 24.0;

// Column positions inside G1000_HEADERS
const LCL_DATE: usize = 0;
const LCL_TIME: usize = 1;
const LATITUDE: usize = 4;
const LONGITUDE: usize = 5;
const BARO_A: usize = 7;
const ALT_MSL: usize = 8;
const GND_SPD: usize = 11;
const TRK: usize = 18;
const VOLT1: usize = 19;

/// One row of a G1000 flight log
///
/// Only the fields below are ever populated; every other column of
/// [`G1000_HEADERS`] is written empty. `None` also renders as an empty cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct G1000Record {
    pub lcl_date: Option<String>,
    pub lcl_time: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub baro_a: f64,
    pub alt_msl: Option<f64>,
    pub gnd_spd: Option<f64>,
    pub trk: Option<f64>,
    pub volt1: f64,
}

impl Default for G1000Record {
    fn default() -> Self {
        Self {
            lcl_date: None,
            lcl_time: None,
            latitude: None,
            longitude: None,
            baro_a: DEFAULT_BARO_INHG,
            alt_msl: None,
            gnd_spd: None,
            trk: None,
            volt1: DEFAULT_VOLT1,
        }
    }
}

impl G1000Record {
    /// Render all 63 cells in header order
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![String::new(); G1000_HEADERS.len()];

        let numeric = |v: Option<f64>| v.map(format_numeric).unwrap_or_default();

        row[LCL_DATE] = self.lcl_date.clone().unwrap_or_default();
        row[LCL_TIME] = self.lcl_time.clone().unwrap_or_default();
        row[LATITUDE] = numeric(self.latitude);
        row[LONGITUDE] = numeric(self.longitude);
        row[BARO_A] = format_numeric(self.baro_a);
        row[ALT_MSL] = numeric(self.alt_msl);
        row[GND_SPD] = numeric(self.gnd_spd);
        row[TRK] = numeric(self.trk);
        row[VOLT1] = format_numeric(self.volt1);

        row
    }
}
