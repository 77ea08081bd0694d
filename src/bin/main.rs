//! CLI binary for Live Track
//!
//! Encodes JSON batches of tracker fixes and exports the resulting tracks.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use glob::glob;
use live_track::{
    export_track, increment_requests, is_emergency_track, make_live_track_with, read_live_points,
    ExportOptions, RequestCounter, SpeedUnit, TrackOptions,
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = Command::new("Live Track")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode live tracker fixes into compact tracks. Output to various formats.")
        .arg(
            Arg::new("files")
                .help("JSON fix batches to encode (.json extension, case-insensitive, supports globbing)")
                .required_unless_present("counter")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed encoding information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export the encoded track to .track.json files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export decoded points to .track.csv files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print JSON output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("kmh")
                .long("kmh")
                .help("Store speeds derived from consecutive fixes in km/h instead of m/s")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("counter")
                .long("counter")
                .help("Increment a packed request counter value and print the result")
                .value_name("VALUE")
                .value_parser(clap::value_parser!(u64))
                .conflicts_with("files"),
        )
        .arg(
            Arg::new("error")
                .long("error")
                .help("With --counter: the request failed")
                .requires("counter")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    init_tracing(debug);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        "starting"
    );

    if let Some(&value) = matches.get_one::<u64>("counter") {
        let next = RequestCounter::new(increment_requests(Some(value), matches.get_flag("error")));
        println!(
            "{} (requests: {}, errors: {})",
            next.value(),
            next.request_count(),
            next.error_count()
        );
        return Ok(());
    }

    let export_options = ExportOptions {
        json: matches.get_flag("json"),
        csv: matches.get_flag("csv"),
        pretty: matches.get_flag("pretty"),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
    };
    let track_options = TrackOptions {
        derived_speed_unit: if matches.get_flag("kmh") {
            SpeedUnit::KilometersPerHour
        } else {
            SpeedUnit::MetersPerSecond
        },
        ..Default::default()
    };
    let file_patterns: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|files| files.collect())
        .unwrap_or_default();

    debug!(?file_patterns, "input patterns");

    let valid_paths = collect_input_paths(&file_patterns);
    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extensions: .json (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    let mut processed_files = 0;
    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match process_file(path, &track_options, &export_options) {
            Ok(()) => processed_files += 1,
            Err(e) => {
                eprintln!("Error processing {filename}: {e:#}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand glob patterns and keep existing `.json` files
fn collect_input_paths(file_patterns: &[&String]) -> Vec<PathBuf> {
    let mut valid_paths = Vec::new();

    for pattern in file_patterns {
        let paths: Vec<PathBuf> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        debug!(pattern = %pattern, matched = paths.len(), "expanded glob");
                        paths
                    }
                    Err(e) => {
                        eprintln!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![PathBuf::from(pattern.as_str())]
        };

        for path in paths {
            if !path.exists() {
                warn!(?path, "file does not exist");
                continue;
            }

            let valid_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);

            if !valid_extension {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
                continue;
            }

            valid_paths.push(path);
        }
    }

    debug!(count = valid_paths.len(), "valid files to process");
    valid_paths
}

fn process_file(
    path: &Path,
    track_options: &TrackOptions,
    export_options: &ExportOptions,
) -> Result<()> {
    let points = read_live_points(path)
        .with_context(|| format!("Failed to read fixes from {}", path.display()))?;
    let track = make_live_track_with(&points, track_options);

    println!(
        "Encoded {} points ({} with extra fields){}",
        track.len(),
        track.extra.len(),
        if is_emergency_track(&track) {
            ", EMERGENCY"
        } else {
            ""
        }
    );

    if !export_options.json && !export_options.csv {
        let json = if export_options.pretty {
            serde_json::to_string_pretty(&track)?
        } else {
            serde_json::to_string(&track)?
        };
        println!("{json}");
        return Ok(());
    }

    let report = export_track(&track, path, export_options)
        .with_context(|| format!("Failed to export track for {}", path.display()))?;
    if let Some(json_path) = report.json_path {
        println!("Exported track to: {}", json_path.display());
    }
    if let Some(csv_path) = report.csv_path {
        println!("Exported points to: {}", csv_path.display());
    }

    Ok(())
}
