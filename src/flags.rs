//! Per-fix flag encoding
//!
//! Every encoded point carries one integer holding the tracker family in the
//! low bits and one bit per status above it:
//!
//! ```text
//!  7         6           5       4 ... 0
//! +---------+-----------+-------+---------+
//! | LOW_BAT | EMERGENCY | VALID | device  |
//! +---------+-----------+-------+---------+
//! ```
//!
//! The positions come from a [`FlagLayout`]; [`FlagLayout::DEFAULT`] is the
//! layout used by the track builder and the free decoding functions.

use crate::types::TrackerId;
use std::fmt;

/// Bit positions of the fields packed into a flags value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagLayout {
    device_bits: u32,
    valid_bit: u32,
    emergency_bit: u32,
    low_bat_bit: u32,
}

impl FlagLayout {
    pub const DEFAULT: FlagLayout = FlagLayout {
        device_bits: 5,
        valid_bit: 5,
        emergency_bit: 6,
        low_bat_bit: 7,
    };

    /// Build a layout, rejecting any where two fields share a bit or a bit
    /// falls outside of `u32`.
    pub const fn new(
        device_bits: u32,
        valid_bit: u32,
        emergency_bit: u32,
        low_bat_bit: u32,
    ) -> Option<FlagLayout> {
        if device_bits == 0 || device_bits > 8 {
            return None;
        }
        if valid_bit >= 32 || emergency_bit >= 32 || low_bat_bit >= 32 {
            return None;
        }
        if valid_bit < device_bits || emergency_bit < device_bits || low_bat_bit < device_bits {
            return None;
        }
        if valid_bit == emergency_bit || valid_bit == low_bat_bit || emergency_bit == low_bat_bit {
            return None;
        }
        Some(FlagLayout {
            device_bits,
            valid_bit,
            emergency_bit,
            low_bat_bit,
        })
    }

    pub const fn device_mask(&self) -> u32 {
        (1 << self.device_bits) - 1
    }

    pub const fn valid_mask(&self) -> u32 {
        1 << self.valid_bit
    }

    pub const fn emergency_mask(&self) -> u32 {
        1 << self.emergency_bit
    }

    pub const fn low_bat_mask(&self) -> u32 {
        1 << self.low_bat_bit
    }

    /// Largest device id the layout can carry
    pub const fn max_device(&self) -> u8 {
        self.device_mask() as u8
    }

    /// Pack a device id and status bits.
    ///
    /// Ids wider than the device field are truncated to it so they can never
    /// bleed into the status bits.
    pub fn encode(&self, device: u8, valid: bool, emergency: bool, low_battery: bool) -> u32 {
        let mut flags = u32::from(device) & self.device_mask();
        if valid {
            flags |= self.valid_mask();
        }
        if emergency {
            flags |= self.emergency_mask();
        }
        if low_battery {
            flags |= self.low_bat_mask();
        }
        flags
    }

    pub fn device(&self, flags: u32) -> u8 {
        (flags & self.device_mask()) as u8
    }

    pub fn is_valid(&self, flags: u32) -> bool {
        flags & self.valid_mask() != 0
    }

    pub fn is_emergency(&self, flags: u32) -> bool {
        flags & self.emergency_mask() != 0
    }

    pub fn is_low_battery(&self, flags: u32) -> bool {
        flags & self.low_bat_mask() != 0
    }
}

impl Default for FlagLayout {
    fn default() -> Self {
        FlagLayout::DEFAULT
    }
}

// The whole tracker table must fit in the default device field.
const _: () = assert!(TrackerId::MAX <= FlagLayout::DEFAULT.max_device());
const _: () = assert!(FlagLayout::new(5, 5, 6, 7).is_some());

/// Flags of a single encoded point, using [`FlagLayout::DEFAULT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiveTrackFlags(u32);

impl LiveTrackFlags {
    pub const VALID: u32 = FlagLayout::DEFAULT.valid_mask();
    pub const EMERGENCY: u32 = FlagLayout::DEFAULT.emergency_mask();
    pub const LOW_BAT: u32 = FlagLayout::DEFAULT.low_bat_mask();
    pub const DEVICE_MASK: u32 = FlagLayout::DEFAULT.device_mask();

    pub fn new(device: u8, valid: bool, emergency: bool, low_battery: bool) -> Self {
        Self(FlagLayout::DEFAULT.encode(device, valid, emergency, low_battery))
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn device(self) -> u8 {
        FlagLayout::DEFAULT.device(self.0)
    }

    /// The device as a known tracker family, if it is one
    pub fn tracker(self) -> Option<TrackerId> {
        TrackerId::try_from(self.device()).ok()
    }

    pub fn is_valid(self) -> bool {
        FlagLayout::DEFAULT.is_valid(self.0)
    }

    pub fn is_emergency(self) -> bool {
        FlagLayout::DEFAULT.is_emergency(self.0)
    }

    pub fn is_low_battery(self) -> bool {
        FlagLayout::DEFAULT.is_low_battery(self.0)
    }
}

impl From<u32> for LiveTrackFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<LiveTrackFlags> for u32 {
    fn from(flags: LiveTrackFlags) -> Self {
        flags.0
    }
}

// Pipe separated so the value stays in a single CSV column
impl fmt::Display for LiveTrackFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states = Vec::new();
        if self.is_valid() {
            states.push("VALID");
        }
        if self.is_emergency() {
            states.push("EMERGENCY");
        }
        if self.is_low_battery() {
            states.push("LOW_BAT");
        }

        match self.tracker() {
            Some(tracker) => write!(f, "{}", tracker)?,
            None => write!(f, "device{}", self.device())?,
        }
        for state in states {
            write!(f, "|{}", state)?;
        }
        Ok(())
    }
}

/// Encode flags with the default layout
pub fn encode_flags(device: u8, valid: bool, emergency: bool, low_battery: bool) -> u32 {
    LiveTrackFlags::new(device, valid, emergency, low_battery).bits()
}

pub fn is_valid_fix(flags: u32) -> bool {
    LiveTrackFlags::from_bits(flags).is_valid()
}

pub fn is_emergency_fix(flags: u32) -> bool {
    LiveTrackFlags::from_bits(flags).is_emergency()
}

pub fn is_low_bat_fix(flags: u32) -> bool {
    LiveTrackFlags::from_bits(flags).is_low_battery()
}

pub fn get_fix_device(flags: u32) -> u8 {
    LiveTrackFlags::from_bits(flags).device()
}
