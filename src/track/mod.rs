//! Construction and manipulation of encoded tracks

pub mod builder;
pub mod extras;
pub mod merge;

pub use builder::*;
pub use extras::*;
pub use merge::*;

use crate::conversion::SpeedUnit;
use crate::flags::FlagLayout;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest gap between the last two fixes for which a speed is derived
pub const DEFAULT_MAX_SPEED_INTERVAL_S: u32 = 10 * 60;

/// Options for encoding a batch of fixes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackOptions {
    /// Unit of the speed derived for the last point when the tracker did not
    /// report one. Reported speeds are stored as received.
    pub derived_speed_unit: SpeedUnit,
    /// No speed is derived when the last two fixes are further apart than
    /// this, in seconds. The bound is inclusive.
    pub max_speed_interval_s: u32,
    /// Bit layout used to encode the per-point flags
    #[cfg_attr(feature = "serde", serde(skip))]
    pub flag_layout: FlagLayout,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            derived_speed_unit: SpeedUnit::default(),
            max_speed_interval_s: DEFAULT_MAX_SPEED_INTERVAL_S,
            flag_layout: FlagLayout::DEFAULT,
        }
    }
}
