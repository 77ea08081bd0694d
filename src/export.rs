//! Export functionality for encoded tracks
//!
//! Writes a [`LiveTrack`] next to the batch it was built from (or into an
//! output directory) as JSON, keeping the compact column layout, and/or as CSV
//! with one decoded row per point.

use crate::error::{LiveTrackError, Result};
use crate::types::LiveTrack;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "csv")]
use crate::conversion::format_utc_timestamp;

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub json: bool,
    pub csv: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Directory for the output files (default: next to the input)
    pub output_dir: Option<String>,
}

/// Paths of the files written by an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub json_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
}

/// Output paths for a given input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// Compute where the exports of `input_path` go.
///
/// `flights/pilot.json` becomes `flights/pilot.track.json` and
/// `flights/pilot.track.csv`, or the same names under `output_dir`.
pub fn compute_export_paths(input_path: &Path, options: &ExportOptions) -> ExportPaths {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("live");

    let output_dir = match options.output_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    ExportPaths {
        json: output_dir.join(format!("{base_name}.track.json")),
        csv: output_dir.join(format!("{base_name}.track.csv")),
    }
}

/// Run every export enabled in `options`
pub fn export_track(
    track: &LiveTrack,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    if options.json {
        #[cfg(feature = "json")]
        {
            report.json_path = Some(export_to_json(track, input_path, options)?);
        }
        #[cfg(not(feature = "json"))]
        {
            return Err(LiveTrackError::Export(
                "JSON export requires the `json` feature".to_string(),
            ));
        }
    }

    if options.csv {
        #[cfg(feature = "csv")]
        {
            report.csv_path = Some(export_to_csv(track, input_path, options)?);
        }
        #[cfg(not(feature = "csv"))]
        {
            return Err(LiveTrackError::Export(
                "CSV export requires the `csv` feature".to_string(),
            ));
        }
    }

    Ok(report)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
            debug!(?dir, "created output directory");
        }
    }
    Ok(())
}

/// Write the encoded track as JSON, returning the written path
#[cfg(feature = "json")]
pub fn export_to_json(
    track: &LiveTrack,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf> {
    use std::fs::File;
    use std::io::{BufWriter, Write};

    let path = compute_export_paths(input_path, options).json;
    ensure_parent_dir(&path)?;

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    if options.pretty {
        serde_json::to_writer_pretty(&mut writer, track)?;
    } else {
        serde_json::to_writer(&mut writer, track)?;
    }
    writeln!(writer)?;
    writer.flush().map_err(|e| {
        LiveTrackError::Export(format!("failed to flush {}: {}", path.display(), e))
    })?;

    debug!(points = track.len(), path = %path.display(), "exported JSON track");
    Ok(path)
}

/// Column names of the CSV export
#[cfg(feature = "csv")]
pub const CSV_HEADER: [&str; 14] = [
    "index",
    "time",
    "time_sec",
    "lat",
    "lon",
    "alt",
    "device",
    "valid",
    "emergency",
    "low_battery",
    "flags",
    "speed",
    "gnd_alt",
    "message",
];

/// Write one decoded row per point as CSV, returning the written path
#[cfg(feature = "csv")]
pub fn export_to_csv(
    track: &LiveTrack,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let path = compute_export_paths(input_path, options).csv;
    ensure_parent_dir(&path)?;

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(CSV_HEADER)?;

    for point in track.points() {
        writer.write_record([
            point.index.to_string(),
            format_utc_timestamp(point.time_sec),
            point.time_sec.to_string(),
            format!("{:.5}", point.lat),
            format!("{:.5}", point.lon),
            point.alt.to_string(),
            point.flags.device().to_string(),
            point.flags.is_valid().to_string(),
            point.flags.is_emergency().to_string(),
            point.flags.is_low_battery().to_string(),
            point.flags.to_string(),
            point.speed().map(|s| s.to_string()).unwrap_or_default(),
            point.gnd_alt().map(|a| a.to_string()).unwrap_or_default(),
            point.message().unwrap_or_default().to_string(),
        ])?;
    }

    writer.flush().map_err(|e| {
        LiveTrackError::Export(format!("failed to flush {}: {}", path.display(), e))
    })?;

    debug!(points = track.len(), path = %path.display(), "exported CSV track");
    Ok(path)
}
