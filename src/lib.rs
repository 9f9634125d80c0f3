//! FR24 to G1000 converter library
//!
//! Converts FlightRadar24 CSV exports (timestamp, position, altitude, speed,
//! direction) into the fixed 63-column Garmin G1000 flight log CSV.
//!
//! # Features
//!
//! - **`cli`** (default): Build the `fr24-g1000` command-line binary
//! - **`serde`**: Enable serialization/deserialization of record types
//!
//! # Quick Start
//!
//! Convert one file next to its input:
//! ```rust,no_run
//! use fr24_g1000::{MapperConfig, RecordMapper};
//! use std::path::Path;
//!
//! let mapper = RecordMapper::new(MapperConfig::default());
//! let report = mapper.convert_file(Path::new("flight1.csv")).unwrap();
//! println!("Wrote {} rows to {}", report.rows, report.output_path.display());
//! ```
//!
//! Convert a batch into another directory:
//! ```rust,no_run
//! use fr24_g1000::{convert_batch, MapperConfig, RecordMapper};
//! use std::path::PathBuf;
//!
//! let mapper = RecordMapper::new(MapperConfig {
//!     output_dir: Some(PathBuf::from("g1000")),
//!     ..MapperConfig::default()
//! });
//! let summary = convert_batch(&mapper, &[PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
//! println!("{} converted, {} failed", summary.succeeded(), summary.failed());
//! ```
//!
//! # Public API
//!
//! ## Conversion
//! - [`RecordMapper`] - Converts tables and files, configured by [`MapperConfig`]
//! - [`convert_batch`] - Sequential multi-file driver returning a [`BatchSummary`]
//! - [`map_record`] - Map a single input row
//!
//! ## Parsing
//! - [`parse_flight_file`] - Read a FlightRadar24 CSV file
//! - [`parse_flight_bytes`] - Read FlightRadar24 CSV data from memory
//!
//! ## Export
//! - [`export_to_g1000_csv`] - Write G1000 rows to disk
//! - [`compute_export_path`] - `<stem>_g1000<.ext>` path computation
//! - [`G1000_HEADERS`] - The fixed 63-column header list

pub mod batch;
pub mod conversion;
pub mod error;
pub mod export;
pub mod mapper;
pub mod parser;
pub mod types;

pub use batch::*;
pub use conversion::*;
pub use error::*;
pub use export::*;
pub use mapper::*;
pub use parser::*;
pub use types::*;
