use crate::error::{ConvertError, Result};
use crate::parser::header::InputColumns;
use crate::types::FlightRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// Parse a FlightRadar24 CSV file into flight records
///
/// The path must name an existing regular file. At least one data row is
/// required.
pub fn parse_flight_file(file_path: &Path) -> Result<Vec<FlightRecord>> {
    if !file_path.is_file() {
        return Err(ConvertError::MissingFile {
            path: file_path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(file_path)
        .map_err(|e| ConvertError::unclassified(file_path, e))?;

    parse_flight_reader(file, file_path)
}

/// Parse FlightRadar24 CSV data from memory
///
/// `source` is only used for error reporting.
pub fn parse_flight_bytes(data: &[u8], source: &Path) -> Result<Vec<FlightRecord>> {
    parse_flight_reader(data, source)
}

fn parse_flight_reader<R: Read>(reader: R, source: &Path) -> Result<Vec<FlightRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ConvertError::unclassified(source, e))?
        .clone();
    let columns = InputColumns::resolve(&headers, source)?;

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| ConvertError::unclassified(source, e))?;
        records.push(to_flight_record(&record, &columns, index + 1));
    }

    if records.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: source.to_path_buf(),
        });
    }

    Ok(records)
}

fn to_flight_record(record: &StringRecord, columns: &InputColumns, row: usize) -> FlightRecord {
    let cell = |index: usize| record.get(index).unwrap_or("").to_string();

    FlightRecord {
        row,
        timestamp: cell(columns.utc),
        position: cell(columns.position),
        altitude: cell(columns.altitude),
        speed: cell(columns.speed),
        direction: cell(columns.direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FR24_SAMPLE: &str = "\
Timestamp,UTC,Callsign,Position,Altitude,Speed,Direction
1709301909,2024-03-01T14:05:09Z,ASA123,\"47.6062,-122.3321\",3500,121,270
1709301919,2024-03-01T14:05:19Z,ASA123,\"47.6100,-122.3400\",3600,125,271
";

    #[test]
    fn test_parse_sample_rows() {
        let records = parse_flight_bytes(FR24_SAMPLE.as_bytes(), Path::new("sample.csv")).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.row, 1);
        assert_eq!(first.timestamp, "2024-03-01T14:05:09Z");
        assert_eq!(first.position, "47.6062,-122.3321");
        assert_eq!(first.altitude, "3500");
        assert_eq!(first.speed, "121");
        assert_eq!(first.direction, "270");

        assert_eq!(records[1].row, 2);
        assert_eq!(records[1].altitude, "3600");
    }

    #[test]
    fn test_empty_file() {
        let err = parse_flight_bytes(b"", Path::new("empty.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput { .. }), "{err:?}");
    }

    #[test]
    fn test_header_only() {
        let data = b"UTC,Position,Altitude,Speed,Direction\n";
        let err = parse_flight_bytes(data, Path::new("header.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput { .. }), "{err:?}");
    }

    #[test]
    fn test_short_row_reads_blank_cells() {
        let data = b"UTC,Position,Altitude,Speed,Direction\n2024-03-01T14:05:09Z,\"1,2\"\n";
        let records = parse_flight_bytes(data, Path::new("short.csv")).unwrap();
        assert_eq!(records[0].altitude, "");
        assert_eq!(records[0].direction, "");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_flight_file(Path::new("/nonexistent/flight.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::MissingFile { .. }), "{err:?}");
    }
}
