//! Encoding of a batch of raw fixes into a [`LiveTrack`]

use crate::conversion::{round_altitude, round_coordinate, timestamp_to_seconds};
use crate::track::extras::build_extras;
use crate::track::TrackOptions;
use crate::types::{LivePoint, LiveTrack};
use tracing::trace;

/// Encode a batch of fixes with the default options
///
/// Points are put in chronological order; every input point produces exactly
/// one output point.
///
/// ```
/// use live_track::{make_live_track, LivePoint, TrackerId};
///
/// let points = vec![
///     LivePoint::new(TrackerId::Inreach.id(), 10.123456, -12.123456, 100.123, 2_000_001),
///     LivePoint::new(TrackerId::Skylines.id(), 11.123456, -13.123456, 200.123, 1_000_001),
/// ];
/// let track = make_live_track(&points);
/// assert_eq!(track.time_sec, vec![1000, 2000]);
/// assert_eq!(track.lat, vec![11.12346, 10.12346]);
/// ```
pub fn make_live_track(points: &[LivePoint]) -> LiveTrack {
    make_live_track_with(points, &TrackOptions::default())
}

/// Encode a batch of fixes
pub fn make_live_track_with(points: &[LivePoint], options: &TrackOptions) -> LiveTrack {
    let mut sorted: Vec<&LivePoint> = points.iter().collect();
    // Stable: fixes sharing a timestamp keep their input order
    sorted.sort_by_key(|point| point.timestamp);

    trace!(points = sorted.len(), "encoding live track");

    let mut track = LiveTrack::with_capacity(sorted.len());
    for point in &sorted {
        track.push(
            round_coordinate(point.lat),
            round_coordinate(point.lon),
            round_altitude(point.alt),
            timestamp_to_seconds(point.timestamp),
            options.flag_layout.encode(
                point.device,
                point.is_valid(),
                point.is_emergency(),
                point.is_low_battery(),
            ),
            None,
        );
    }
    track.extra = build_extras(&sorted, options);

    track
}
