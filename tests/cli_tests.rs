use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Integration tests for the command-line binary
/// These run the compiled fr24-g1000 executable against fixture files

const SAMPLE: &str = "\
Timestamp,UTC,Callsign,Position,Altitude,Speed,Direction
1709301909,2024-03-01T14:05:09Z,ASA123,\"47.6062,-122.3321\",3500,121,270
1709301919,2024-03-01T14:05:19Z,ASA123,\"47.6100,-122.3400\",3600,125,271
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fr24-g1000"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run fr24-g1000")
}

#[test]
fn test_converts_into_output_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("flight1.csv");
    fs::write(&input, SAMPLE).unwrap();
    let out_dir = temp_dir.path().join("converted");

    let output = run(&[
        "--output-dir",
        out_dir.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "Converter failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let csv_path = out_dir.join("flight1_g1000.csv");
    let content = fs::read_to_string(&csv_path).expect("Failed to read generated CSV file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Lcl Date,Lcl Time,UTCOfst,AtvWpt,Latitude,Longitude"));
    assert!(lines[0].ends_with("HAL,VAL,HPLwas,HPLfd,VPLwas"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Converted file saved to:"),
        "missing success log line: {stderr}"
    );
}

#[test]
fn test_bad_file_is_logged_and_batch_continues() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let good1 = temp_dir.path().join("flight1.csv");
    let bad = temp_dir.path().join("flight2.csv");
    let good3 = temp_dir.path().join("flight3.csv");
    fs::write(&good1, SAMPLE).unwrap();
    fs::write(&bad, "UTC,Altitude,Speed,Direction\n2024-03-01T14:05:09Z,1,2,3\n").unwrap();
    fs::write(&good3, SAMPLE).unwrap();

    let output = run(&[
        good1.to_str().unwrap(),
        bad.to_str().unwrap(),
        good3.to_str().unwrap(),
    ]);

    // Any failed file makes the exit status non-zero
    assert_eq!(output.status.code(), Some(1));

    assert!(temp_dir.path().join("flight1_g1000.csv").is_file());
    assert!(!temp_dir.path().join("flight2_g1000.csv").exists());
    assert!(temp_dir.path().join("flight3_g1000.csv").is_file());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let error_lines: Vec<&str> = stderr.lines().filter(|l| l.contains("ERROR")).collect();
    assert_eq!(error_lines.len(), 1, "{stderr}");
    assert!(error_lines[0].contains("flight2.csv"), "{stderr}");
    assert!(error_lines[0].contains("Position"), "{stderr}");
}

#[test]
fn test_empty_file_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("empty.csv");
    fs::write(&input, "UTC,Position,Altitude,Speed,Direction\n").unwrap();

    let output = run(&[input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("empty_g1000.csv").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no data in file"), "{stderr}");
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
}
