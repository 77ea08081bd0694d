//! Reading fix batches from JSON
//!
//! A batch is a JSON array of fixes using camelCase keys:
//!
//! ```json
//! [{"device": 1, "lat": 45.1, "lon": 6.2, "alt": 1200.0, "timestamp": 1700000000000,
//!   "gndAlt": 950.0, "valid": true, "lowBattery": null, "message": "ok"}]
//! ```

use crate::error::{LiveTrackError, Result};
use crate::types::LivePoint;
use std::fs;
use std::path::Path;

/// Parse a batch of fixes from a JSON string
pub fn parse_live_points(json: &str) -> Result<Vec<LivePoint>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(LiveTrackError::InvalidInput(
            "expected a JSON array of fixes".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Read a batch of fixes from a JSON file
pub fn read_live_points(path: &Path) -> Result<Vec<LivePoint>> {
    let content = fs::read_to_string(path)?;
    parse_live_points(&content)
}
