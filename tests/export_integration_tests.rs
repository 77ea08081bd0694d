//! Integration tests for export functionality
//!
//! Tests the export layer across different scenarios:
//! - Reading a JSON batch and writing JSON/CSV exports
//! - Output directory creation and defaulting to the input parent
//! - Sparse extras surviving a JSON round trip

#![cfg(all(feature = "json", feature = "csv"))]

use live_track::{
    export_to_csv, export_to_json, export_track, make_live_track, read_live_points,
    ExportOptions, LiveTrack, CSV_HEADER,
};
use std::fs;
use tempfile::TempDir;

const BATCH: &str = r#"[
    {"device": 1, "lat": 45.9123456, "lon": 6.8712345, "alt": 2400.4, "timestamp": 1700000060000,
     "emergency": true, "message": "need help, twisted ankle"},
    {"device": 1, "lat": 45.9, "lon": 6.86, "alt": 2350.6, "timestamp": 1700000000000, "valid": null},
    {"device": 2, "lat": 45.89, "lon": 6.85, "alt": 2300.0, "timestamp": 1700000030000,
     "valid": false, "gndAlt": 2210.2}
]"#;

fn write_batch(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pilot.json");
    fs::write(&path, BATCH).expect("Failed to write batch");
    path
}

#[test]
fn test_read_and_encode_batch() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_batch(&temp_dir);

    let points = read_live_points(&input).expect("Failed to read batch");
    let track = make_live_track(&points);

    assert_eq!(track.time_sec, vec![1700000000, 1700000030, 1700000060]);
    assert_eq!(track.alt, vec![2351, 2300, 2400]);
    assert_eq!(track.extra.len(), 2);
    assert_eq!(track.extra[&1].gnd_alt, Some(2210));
    assert_eq!(
        track.extra[&2].message.as_deref(),
        Some("need help, twisted ankle")
    );
    assert!(track.extra[&2].speed.is_some());
}

#[test]
fn test_export_json_creates_output_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_batch(&temp_dir);
    let output_dir = temp_dir.path().join("nonexistent").join("output");

    let track = make_live_track(&read_live_points(&input).unwrap());
    let options = ExportOptions {
        json: true,
        output_dir: Some(output_dir.to_str().unwrap().to_string()),
        ..Default::default()
    };

    let path = export_to_json(&track, &input, &options).expect("JSON export should succeed");
    assert!(output_dir.exists(), "Output directory should be created");
    assert_eq!(path, output_dir.join("pilot.track.json"));

    let content = fs::read_to_string(&path).expect("Failed to read JSON export");
    assert!(content.contains("\"timeSec\""));
    assert!(content.contains("\"gndAlt\":2210"));
    // Absent fields are not serialized as null
    assert!(!content.contains("null"));

    // Flags are stored as plain integers
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["flags"], serde_json::json!(track.flags));

    let decoded: LiveTrack = serde_json::from_str(&content).expect("Export should parse back");
    assert_eq!(decoded, track);
}

#[test]
fn test_export_csv_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_batch(&temp_dir);
    let track = make_live_track(&read_live_points(&input).unwrap());

    let path = export_to_csv(&track, &input, &ExportOptions::default())
        .expect("CSV export should succeed");
    assert_eq!(path, temp_dir.path().join("pilot.track.csv"));

    let mut reader = csv::Reader::from_path(&path).expect("Failed to open CSV export");
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(headers, CSV_HEADER.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][1], "2023-11-14T22:13:20Z");
    assert_eq!(&rows[1][7], "false");
    assert_eq!(&rows[1][12], "2210");
    assert_eq!(&rows[2][8], "true");
    // Commas in messages stay in one field
    assert_eq!(&rows[2][13], "need help, twisted ankle");
}

#[test]
fn test_export_track_reports_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_batch(&temp_dir);
    let track = make_live_track(&read_live_points(&input).unwrap());

    let options = ExportOptions {
        json: true,
        csv: true,
        pretty: true,
        output_dir: None,
    };
    let report = export_track(&track, &input, &options).expect("Export should succeed");

    let json_path = report.json_path.expect("JSON path should be reported");
    let csv_path = report.csv_path.expect("CSV path should be reported");
    assert!(json_path.exists());
    assert!(csv_path.exists());
    let json = fs::read_to_string(json_path).unwrap();
    assert!(json.contains("\n  \"lat\""));
}

#[test]
fn test_read_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = read_live_points(&temp_dir.path().join("missing.json"));
    assert!(result.is_err());
}
