#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw position report from a tracker, before encoding
///
/// Optional booleans are tri-state on the wire: `None` covers both a missing
/// key and an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LivePoint {
    /// Tracker family, see [`crate::TrackerId`]
    pub device: u8,
    pub lat: f64,
    pub lon: f64,
    /// Altitude in meters
    pub alt: f64,
    /// Ground elevation under the fix in meters
    #[cfg_attr(feature = "serde", serde(default))]
    pub gnd_alt: Option<f64>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// `None` is treated as a valid fix
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub emergency: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub low_battery: Option<bool>,
    /// Speed reported by the device, trusted as-is
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
}

impl LivePoint {
    pub fn new(device: u8, lat: f64, lon: f64, alt: f64, timestamp: i64) -> Self {
        Self {
            device,
            lat,
            lon,
            alt,
            timestamp,
            ..Default::default()
        }
    }

    /// Only an explicit `false` marks a fix as invalid
    pub fn is_valid(&self) -> bool {
        self.valid != Some(false)
    }

    pub fn is_emergency(&self) -> bool {
        self.emergency == Some(true)
    }

    pub fn is_low_battery(&self) -> bool {
        self.low_battery == Some(true)
    }
}
