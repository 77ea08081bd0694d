//! Live Track Library
//!
//! A Rust library for encoding live GPS tracker fixes (InReach, Spot,
//! SkyLines, Flymaster, ...) into a compact, column-oriented track, and for
//! tallying tracker request/error telemetry in a bounded packed counter.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export of decoded tracks
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable reading fix batches and exporting tracks as JSON
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Encode a batch of fixes:
//! ```rust
//! use live_track::{make_live_track, is_emergency_fix, LivePoint, TrackerId};
//!
//! let mut sos = LivePoint::new(TrackerId::Inreach.id(), 45.91234, 6.86721, 2400.0, 1_700_000_060_000);
//! sos.emergency = Some(true);
//! let points = vec![
//!     sos,
//!     LivePoint::new(TrackerId::Inreach.id(), 45.9, 6.86, 2350.0, 1_700_000_000_000),
//! ];
//!
//! let track = make_live_track(&points);
//! assert_eq!(track.time_sec, vec![1_700_000_000, 1_700_000_060]);
//! assert!(is_emergency_fix(track.flags[1]));
//! // Speed derived between the last two fixes
//! assert!(track.extra[&1].speed.is_some());
//! ```
//!
//! Tally requests:
//! ```rust
//! use live_track::{increment_requests, RequestCounter};
//!
//! let value = increment_requests(Some(41_007), true);
//! let counter = RequestCounter::new(value);
//! assert_eq!((counter.error_count(), counter.request_count()), (42, 8));
//! ```
//!
//! # Public API
//!
//! ## Track Functions
//! - [`make_live_track`] - Encode a batch of fixes with default options
//! - [`make_live_track_with`] - Encode a batch with [`TrackOptions`]
//! - [`build_extras`] - Build the sparse optional field table
//! - [`merge_live_tracks`] - Merge a newer track into an older one
//! - [`remove_before`] - Drop points older than a cutoff
//!
//! ## Flag Functions
//! - [`encode_flags`] - Pack device id and status bits
//! - [`is_valid_fix`], [`is_emergency_fix`], [`is_low_bat_fix`], [`get_fix_device`]
//! - [`LiveTrackFlags`] and [`FlagLayout`] - Typed access and custom layouts
//!
//! ## Filtering Functions
//! - [`filter_track`], [`emergency_only`], [`valid_only`], [`is_emergency_track`]
//!
//! ## Counter
//! - [`increment_requests`] - Packed request/error counter update
//! - [`RequestCounter`] - Typed view of a counter value
//!
//! ## Export Functions
//! - [`export_track`] - Run the exports selected in [`ExportOptions`]
//! - `export_to_json` / `export_to_csv` - Single format exports (feature gated)
//! - [`compute_export_paths`] - Helper for consistent path computation

// Module declarations
pub mod conversion;
pub mod counter;
pub mod error;
pub mod export;
pub mod filters;
pub mod flags;
pub mod geo;
#[cfg(feature = "json")]
pub mod input;
pub mod track;
pub mod types;

pub use conversion::*;
pub use counter::*;
pub use error::*;
pub use export::*;
pub use filters::*;
pub use flags::*;
#[cfg(feature = "json")]
pub use input::*;
pub use track::*;
pub use types::*;
