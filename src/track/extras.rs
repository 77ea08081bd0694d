//! Sparse optional fields of an encoded track
//!
//! Only points carrying a speed, a ground altitude or a message get an entry.
//! The last point of a batch additionally gets a speed derived from the
//! previous fix when its tracker did not report one and both fixes are at
//! most [`TrackOptions::max_speed_interval_s`] apart.

use crate::conversion::{round_ground_altitude, round_speed};
use crate::geo::{speed_between, LatLon};
use crate::track::TrackOptions;
use crate::types::{ExtraFields, LivePoint};
use std::collections::BTreeMap;
use tracing::debug;

/// Build the extras table for points already in track order
pub fn build_extras(
    points: &[&LivePoint],
    options: &TrackOptions,
) -> BTreeMap<usize, ExtraFields> {
    points
        .iter()
        .enumerate()
        .filter_map(|(index, _)| {
            extras_at(points, index, options).map(|extra| (index, extra))
        })
        .collect()
}

/// Optional fields of the point at `index`, `None` when it has none
pub fn extras_at(
    points: &[&LivePoint],
    index: usize,
    options: &TrackOptions,
) -> Option<ExtraFields> {
    let point = points.get(index)?;

    let reported_speed = point.speed.filter(|s| s.is_finite());
    let speed = match reported_speed {
        Some(speed) => round_speed(speed),
        None if index + 1 == points.len() && index > 0 => {
            derived_speed(points[index - 1], point, options)
        }
        None => None,
    };

    let extra = ExtraFields {
        speed,
        gnd_alt: point.gnd_alt.and_then(round_ground_altitude),
        message: point.message.clone().filter(|m| !m.is_empty()),
    };

    (!extra.is_empty()).then_some(extra)
}

/// Speed between two consecutive fixes in the configured unit, rounded.
/// `None` when they are not strictly ordered in time or too far apart.
fn derived_speed(previous: &LivePoint, last: &LivePoint, options: &TrackOptions) -> Option<u32> {
    let elapsed_ms = last.timestamp.saturating_sub(previous.timestamp);
    if elapsed_ms > i64::from(options.max_speed_interval_s) * 1000 {
        debug!(
            elapsed_ms,
            max_s = options.max_speed_interval_s,
            "last fixes too far apart, speed omitted"
        );
        return None;
    }

    let mps = speed_between(
        LatLon::new(previous.lat, previous.lon),
        previous.timestamp,
        LatLon::new(last.lat, last.lon),
        last.timestamp,
    );

    match mps {
        Some(mps) => {
            let speed = options.derived_speed_unit.from_meters_per_second(mps);
            debug!(
                speed,
                unit = options.derived_speed_unit.suffix(),
                "derived speed for last point"
            );
            round_speed(speed)
        }
        None => {
            debug!(
                previous_ms = previous.timestamp,
                last_ms = last.timestamp,
                "no elapsed time before last point, speed omitted"
            );
            None
        }
    }
}
