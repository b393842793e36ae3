use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting values outside [-90, 90] / [-180, 180].
    pub fn validated(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Parse `"lat,lon"` (spaces allowed) into a validated coordinate.
    pub fn parse(input: &str) -> AppResult<Self> {
        let (lat, lon) = input
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinate(format!("expected 'lat,lon', got '{}'", input)))?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(format!("bad latitude '{}'", lat.trim())))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(format!("bad longitude '{}'", lon.trim())))?;

        Self::validated(lat, lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// One position report from a location platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub coordinate: Coordinate,
    /// Milliseconds (wall clock or monotonic, as delivered by the platform).
    pub timestamp: i64,
    /// Reported horizontal accuracy in meters, if any.
    pub accuracy: Option<f64>,
}

impl LocationSample {
    pub fn new(coordinate: Coordinate, timestamp: i64) -> Self {
        Self {
            coordinate,
            timestamp,
            accuracy: None,
        }
    }

    pub fn at(latitude: f64, longitude: f64, timestamp: i64) -> Self {
        Self::new(Coordinate::new(latitude, longitude), timestamp)
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}
