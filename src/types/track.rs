use crate::flags::LiveTrackFlags;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional per-point fields, stored only for the points that have them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExtraFields {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub speed: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub gnd_alt: Option<i32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub message: Option<String>,
}

impl ExtraFields {
    /// True when no field is populated; such entries are never stored
    pub fn is_empty(&self) -> bool {
        self.speed.is_none() && self.gnd_alt.is_none() && self.message.is_none()
    }
}

/// Column-oriented encoded track
///
/// All the vectors have the same length and are indexed by point. `extra` is
/// keyed by the same index and only holds points with optional data.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LiveTrack {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub alt: Vec<i32>,
    pub time_sec: Vec<i64>,
    pub flags: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra: BTreeMap<usize, ExtraFields>,
}

impl LiveTrack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lat: Vec::with_capacity(capacity),
            lon: Vec::with_capacity(capacity),
            alt: Vec::with_capacity(capacity),
            time_sec: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
            extra: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.time_sec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_sec.is_empty()
    }

    /// Get a decoded view of the point at `index`
    pub fn point(&self, index: usize) -> Option<TrackPoint<'_>> {
        Some(TrackPoint {
            index,
            lat: *self.lat.get(index)?,
            lon: *self.lon.get(index)?,
            alt: *self.alt.get(index)?,
            time_sec: *self.time_sec.get(index)?,
            flags: LiveTrackFlags::from_bits(*self.flags.get(index)?),
            extra: self.extra.get(&index),
        })
    }

    /// Iterate over decoded views of every point, in track order
    pub fn points(&self) -> impl Iterator<Item = TrackPoint<'_>> + '_ {
        (0..self.len()).filter_map(move |index| self.point(index))
    }

    /// Append one encoded point, keeping `extra` sparse
    pub(crate) fn push(
        &mut self,
        lat: f64,
        lon: f64,
        alt: i32,
        time_sec: i64,
        flags: u32,
        extra: Option<ExtraFields>,
    ) {
        let index = self.len();
        self.lat.push(lat);
        self.lon.push(lon);
        self.alt.push(alt);
        self.time_sec.push(time_sec);
        self.flags.push(flags);
        if let Some(extra) = extra.filter(|e| !e.is_empty()) {
            self.extra.insert(index, extra);
        }
    }

    /// Append a point decoded from another track
    pub(crate) fn push_point(&mut self, point: &TrackPoint<'_>) {
        self.push(
            point.lat,
            point.lon,
            point.alt,
            point.time_sec,
            point.flags.bits(),
            point.extra.cloned(),
        );
    }
}

/// Borrowed view of one point of a [`LiveTrack`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint<'a> {
    pub index: usize,
    pub lat: f64,
    pub lon: f64,
    pub alt: i32,
    pub time_sec: i64,
    pub flags: LiveTrackFlags,
    pub extra: Option<&'a ExtraFields>,
}

impl TrackPoint<'_> {
    pub fn speed(&self) -> Option<u32> {
        self.extra.and_then(|e| e.speed)
    }

    pub fn gnd_alt(&self) -> Option<i32> {
        self.extra.and_then(|e| e.gnd_alt)
    }

    pub fn message(&self) -> Option<&str> {
        self.extra.and_then(|e| e.message.as_deref())
    }
}
