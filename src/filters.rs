//! Point selection on encoded tracks
//!
//! Consumers typically render a subset of a track, e.g. only the fixes sent
//! while the emergency mode was on. Filtering produces a new track whose
//! `extra` indices refer to the filtered columns.

use crate::types::{LiveTrack, TrackPoint};

/// Build a new track from the points matching `keep`
pub fn filter_track<F>(track: &LiveTrack, mut keep: F) -> LiveTrack
where
    F: FnMut(&TrackPoint<'_>) -> bool,
{
    let mut filtered = LiveTrack::default();
    for point in track.points() {
        if keep(&point) {
            filtered.push_point(&point);
        }
    }
    filtered
}

/// Keep only the fixes flagged as emergency
pub fn emergency_only(track: &LiveTrack) -> LiveTrack {
    filter_track(track, |point| point.flags.is_emergency())
}

/// Drop the fixes flagged as invalid
pub fn valid_only(track: &LiveTrack) -> LiveTrack {
    filter_track(track, |point| point.flags.is_valid())
}

/// Whether any fix of the track was sent in emergency mode
pub fn is_emergency_track(track: &LiveTrack) -> bool {
    track.points().any(|point| point.flags.is_emergency())
}
