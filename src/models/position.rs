// src/models/position.rs
// DOCUMENTATION: Geographic position of the user
// PURPOSE: Value produced by a location provider once per attempt

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Current position reported by a location provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Accuracy radius in meters, when the provider reports one
    pub accuracy: Option<f64>,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }

    /// Format as the `lat,lng` pair expected by the nearby-search `location` parameter
    pub fn to_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

/// Parse a `lat,lng` pair (e.g. "40.0,-74.0")
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected 'lat,lng', got '{}'", s))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|e| format!("invalid latitude '{}': {}", lat.trim(), e))?;
        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|e| format!("invalid longitude '{}': {}", lng.trim(), e))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("latitude {} out of range", latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("longitude {} out of range", longitude));
        }

        Ok(Position::new(latitude, longitude))
    }
}

/// Options handed to the location provider for one request
#[derive(Debug, Clone, PartialEq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// The selector gives up on the provider after this long
    pub timeout: Duration,
    /// Zero means a cached position must never be reused
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        let position: Position = "40.0, -74.0".parse().unwrap();
        assert_eq!(position, Position::new(40.0, -74.0));
        assert_eq!(position.to_query(), "40,-74");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("40.0".parse::<Position>().is_err());
        assert!("north,-74.0".parse::<Position>().is_err());
        assert!("91.0,0.0".parse::<Position>().is_err());
        assert!("0.0,181.0".parse::<Position>().is_err());
    }

    #[test]
    fn test_default_options() {
        let options = PositionOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.maximum_age, Duration::ZERO);
    }
}
