//! Quantization and unit conversion utilities
//!
//! Contains the lossy conversions applied when a raw fix is packed into a
//! track: coordinate precision, integer altitudes, second resolution timestamps
//! and speed units.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal digits kept for latitude and longitude (~1.1 m at the equator)
pub const COORDINATE_DECIMALS: i32 = 5;

/// Round a value to a number of decimal digits, half away from zero
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert a coordinate in degrees to its encoded precision
pub fn round_coordinate(degrees: f64) -> f64 {
    round_to_decimals(degrees, COORDINATE_DECIMALS)
}

/// Convert an altitude in meters to the nearest whole meter
pub fn round_altitude(meters: f64) -> i32 {
    meters.round() as i32
}

/// Convert milliseconds since epoch to whole seconds, truncating toward zero
pub fn timestamp_to_seconds(timestamp_ms: i64) -> i64 {
    timestamp_ms / 1000
}

/// Round a speed for the extras table.
///
/// Returns `None` for NaN and infinities so they are omitted rather than
/// stored. Negative speeds clamp to 0.
pub fn round_speed(speed: f64) -> Option<u32> {
    if !speed.is_finite() {
        return None;
    }
    Some(speed.round().max(0.0) as u32)
}

/// Round a ground altitude for the extras table, `None` if not finite
pub fn round_ground_altitude(meters: f64) -> Option<i32> {
    if !meters.is_finite() {
        return None;
    }
    Some(meters.round() as i32)
}

/// Unit used when a speed has to be derived from two fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpeedUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    /// Convert a speed in m/s to this unit
    pub fn from_meters_per_second(self, mps: f64) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => mps,
            SpeedUnit::KilometersPerHour => mps * 3.6,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::KilometersPerHour => "km/h",
        }
    }
}

// ============================================================================
// UTC timestamp formatting (for CSV export)
// ============================================================================

/// Format seconds since the Unix epoch as an ISO 8601 UTC timestamp.
/// Times before the epoch are clamped to it.
pub fn format_utc_timestamp(time_sec: i64) -> String {
    let total_seconds = u64::try_from(time_sec).unwrap_or(0);

    let secs_per_minute = 60u64;
    let secs_per_hour = 3600u64;
    let secs_per_day = 86400u64;

    let days = total_seconds / secs_per_day;
    let time_of_day = total_seconds % secs_per_day;
    let hours = time_of_day / secs_per_hour;
    let minutes = (time_of_day % secs_per_hour) / secs_per_minute;
    let seconds = time_of_day % secs_per_minute;

    let (year, month, day) = days_to_ymd(days);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year, month, day, hours, minutes, seconds
    )
}

/// Convert days since Unix epoch to year/month/day
fn days_to_ymd(days: u64) -> (u32, u32, u32) {
    let mut remaining_days = days as i64;
    let mut year = 1970u32;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let mut days_in_month = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if is_leap_year(year) {
        days_in_month[2] = 29;
    }

    let mut month = 1u32;
    for (m, &days) in days_in_month.iter().enumerate().skip(1) {
        if remaining_days < days as i64 {
            month = m as u32;
            break;
        }
        remaining_days -= days as i64;
    }

    let day = (remaining_days + 1) as u32;

    (year, month, day)
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_coordinate_keeps_five_digits() {
        assert_eq!(round_coordinate(10.123456), 10.12346);
        assert_eq!(round_coordinate(-12.123456), -12.12346);
        assert_eq!(round_coordinate(45.0), 45.0);
    }

    #[test]
    fn test_round_altitude() {
        assert_eq!(round_altitude(100.123), 100);
        assert_eq!(round_altitude(99.5), 100);
        assert_eq!(round_altitude(-3.5), -4);
    }

    #[test]
    fn test_timestamp_truncates() {
        assert_eq!(timestamp_to_seconds(20001), 20);
        assert_eq!(timestamp_to_seconds(1999), 1);
        assert_eq!(timestamp_to_seconds(0), 0);
    }

    #[test]
    fn test_round_speed_rejects_non_finite() {
        assert_eq!(round_speed(10.123), Some(10));
        assert_eq!(round_speed(-2.0), Some(0));
        assert_eq!(round_speed(f64::NAN), None);
        assert_eq!(round_speed(f64::INFINITY), None);
    }

    #[test]
    fn test_round_ground_altitude() {
        assert_eq!(round_ground_altitude(80.123), Some(80));
        assert_eq!(round_ground_altitude(-420.6), Some(-421));
        assert_eq!(round_ground_altitude(f64::NAN), None);
    }

    #[test]
    fn test_speed_unit_conversion() {
        assert_eq!(
            SpeedUnit::MetersPerSecond.from_meters_per_second(10.0),
            10.0
        );
        let kmh = SpeedUnit::KilometersPerHour.from_meters_per_second(10.0);
        assert!((kmh - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_utc_timestamp() {
        assert_eq!(format_utc_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_utc_timestamp(1_700_000_000), "2023-11-14T22:13:20Z");
        assert_eq!(format_utc_timestamp(-5), "1970-01-01T00:00:00Z");
        // 2024-02-29 (leap day) at noon
        assert_eq!(format_utc_timestamp(1_709_208_000), "2024-02-29T12:00:00Z");
    }
}
