//! Combining and trimming encoded tracks
//!
//! Trackers are polled repeatedly, each poll producing a fresh batch. These
//! helpers fold a new batch into the stored track and drop points that have
//! aged out, re-indexing `extra` so it keeps matching the columns.

use crate::filters::filter_track;
use crate::types::LiveTrack;
use std::cmp::Ordering;

/// Merge two chronologically ordered tracks.
///
/// When both tracks have points for the same second, the point from `newer`
/// replaces every point `older` has for that second.
pub fn merge_live_tracks(older: &LiveTrack, newer: &LiveTrack) -> LiveTrack {
    let mut merged = LiveTrack::with_capacity(older.len() + newer.len());
    let mut old_points = older.points().peekable();
    let mut new_points = newer.points().peekable();

    loop {
        let order = match (old_points.peek(), new_points.peek()) {
            (Some(old), Some(new)) => old.time_sec.cmp(&new.time_sec),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };
        let next = match order {
            Ordering::Less => old_points.next(),
            Ordering::Greater => new_points.next(),
            Ordering::Equal => {
                let next = new_points.next();
                if let Some(time_sec) = next.as_ref().map(|point| point.time_sec) {
                    while old_points.next_if(|old| old.time_sec == time_sec).is_some() {}
                }
                next
            }
        };
        if let Some(point) = next {
            merged.push_point(&point);
        }
    }

    merged
}

/// Remove the points strictly older than `time_sec`
pub fn remove_before(track: &LiveTrack, time_sec: i64) -> LiveTrack {
    filter_track(track, |point| point.time_sec >= time_sec)
}
