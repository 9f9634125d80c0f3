//! CLI binary for the FR24 to G1000 converter

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use fr24_g1000::{convert_batch, MapperConfig, RecordMapper};
use glob::glob;
use log::{debug, error, warn, LevelFilter};
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

fn build_command() -> Command {
    Command::new("fr24-g1000")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(LONG_VERSION)
        .about("Convert FlightRadar24 ADS-B CSV files into Garmin G1000 flight log CSV format.")
        .arg(
            Arg::new("files")
                .help("One or more input CSV files to convert (allows shell globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .alias("output_dir")
                .help("Optional directory to save converted CSV files (default: same directory as input)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

fn is_glob_pattern(arg: &str) -> bool {
    arg.contains('*') || arg.contains('?') || arg.contains('[')
}

/// Expand patterns the shell left untouched; plain paths pass through as-is
fn expand_input_paths(patterns: &[String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Names the shell already expanded may contain '[' or '?' literally
        if !is_glob_pattern(pattern) || Path::new(pattern).is_file() {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        match glob(pattern) {
            Ok(glob_iter) => {
                let mut matched = 0;
                for entry in glob_iter {
                    match entry {
                        Ok(path) => {
                            matched += 1;
                            paths.push(path);
                        }
                        Err(e) => warn!("Error expanding glob pattern '{pattern}': {e}"),
                    }
                }
                debug!("Glob pattern '{pattern}' matched {matched} files");
                if matched == 0 {
                    warn!("No files match pattern '{pattern}'");
                }
            }
            Err(e) => warn!("Invalid glob pattern '{pattern}': {e}"),
        }
    }

    paths
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let verbosity = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(verbosity)
        .parse_default_env()
        .init();

    let output_dir = matches.get_one::<String>("output-dir").map(PathBuf::from);
    let patterns: Vec<String> = matches
        .get_many::<String>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    debug!("Input patterns: {patterns:?}");

    let input_files = expand_input_paths(&patterns);
    if input_files.is_empty() {
        error!("No input files found for patterns: {patterns:?}");
        std::process::exit(1);
    }

    let mapper = RecordMapper::new(MapperConfig {
        output_dir,
        verbosity,
    });
    let summary = convert_batch(&mapper, &input_files);

    debug!(
        "{} of {} files converted",
        summary.succeeded(),
        summary.outcomes.len()
    );

    if !summary.all_succeeded() {
        std::process::exit(1);
    }

    Ok(())
}
