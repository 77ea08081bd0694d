//! Spherical Earth distance and speed estimation
//!
//! Fixes are close together in practice, so the haversine formula on a mean
//! radius sphere is accurate enough and stable for small separations.

/// Mean Earth radius for the spherical approximation, in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance in meters between two points
///
/// # Example
/// ```
/// use live_track::geo::{distance, LatLon};
///
/// // London to Paris, roughly 344 km
/// let d = distance(LatLon::new(51.5074, -0.1278), LatLon::new(48.8566, 2.3522));
/// assert!((d - 344_000.0).abs() < 5_000.0);
/// ```
pub fn distance(a: LatLon, b: LatLon) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Speed in m/s over a distance, `None` when the elapsed time is not positive
/// or the result is not a finite number.
pub fn speed(distance_m: f64, elapsed_s: f64) -> Option<f64> {
    if elapsed_s.is_nan() || elapsed_s <= 0.0 {
        return None;
    }
    let mps = distance_m / elapsed_s;
    mps.is_finite().then_some(mps)
}

/// Speed in m/s between two timestamped points (milliseconds)
pub fn speed_between(a: LatLon, a_ms: i64, b: LatLon, b_ms: i64) -> Option<f64> {
    let elapsed_s = b_ms.saturating_sub(a_ms) as f64 / 1000.0;
    speed(distance(a, b), elapsed_s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        let p = LatLon::new(45.5, 6.2);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        // One degree of latitude is ~111.19 km on a 6371 km sphere
        let d = distance(LatLon::new(0.0, 0.0), LatLon::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0, "Distance: {} meters", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = LatLon::new(10.0, -12.0);
        let b = LatLon::new(10.5, -11.2);
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-6);
    }

    #[test]
    fn test_speed_requires_positive_elapsed() {
        assert_eq!(speed(100.0, 10.0), Some(10.0));
        assert_eq!(speed(100.0, 0.0), None);
        assert_eq!(speed(100.0, -1.0), None);
        assert_eq!(speed(100.0, f64::NAN), None);
        assert_eq!(speed(f64::NAN, 1.0), None);
    }

    #[test]
    fn test_speed_between_points() {
        let start = LatLon::new(0.0, 0.0);
        let end = LatLon::new(1.0, 0.0);
        let mps = speed_between(start, 0, end, 3_600_000).unwrap();
        // 111.19 km in one hour
        assert!((mps - 30.887).abs() < 0.01, "Speed: {} m/s", mps);
        assert_eq!(speed_between(start, 1000, end, 1000), None);
    }
}
