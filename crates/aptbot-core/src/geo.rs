// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("cannot compute distance/bearing for invalid position {0}")]
    InvalidPosition(LatLon),
}

/// A position in decimal degrees.
///
/// Unknown positions are stored as [`LatLon::INVALID`] rather than `Option`, so
/// every consumer goes through [`LatLon::is_valid`] (or the `GeoError` returned
/// by [`LatLon::distance_bearing`]) before trusting the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Sentinel for a missing position. Out of range on both axes.
    pub const INVALID: LatLon = LatLon {
        lat: 1000.0,
        lon: 1000.0,
    };

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Parses a latitude/longitude pair of decimal strings.
    /// Each value is range checked with the same bounds as [`LatLon::is_valid`].
    pub fn parse(lat: &str, lon: &str) -> Result<Self, ParseError> {
        let lat_v = parse_number("latitude", lat)?;
        if !(-90.0..=90.0).contains(&lat_v) {
            return Err(ParseError::OutOfRange {
                field: "latitude",
                text: lat.to_string(),
            });
        }

        let lon_v = parse_number("longitude", lon)?;
        if !(-180.0..=180.0).contains(&lon_v) {
            return Err(ParseError::OutOfRange {
                field: "longitude",
                text: lon.to_string(),
            });
        }

        Ok(Self::new(lat_v, lon_v))
    }

    /// Great-circle distance in km (haversine, spherical earth) and initial
    /// bearing in degrees, normalized to `[0, 360)`.
    pub fn distance_bearing(&self, other: &LatLon) -> Result<(f64, f64), GeoError> {
        if !self.is_valid() {
            return Err(GeoError::InvalidPosition(*self));
        }
        if !other.is_valid() {
            return Err(GeoError::InvalidPosition(*other));
        }

        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let lat2 = other.lat.to_radians();
        let lon2 = other.lon.to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = lon2 - lon1;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding pushes `a` past 1.0 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let distance = 2.0 * a.sqrt().atan2((1.0 - a).sqrt()) * EARTH_RADIUS_KM;

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        Ok((distance, normalize_degrees(y.atan2(x).to_degrees())))
    }

    pub fn distance_km(&self, other: &LatLon) -> Result<f64, GeoError> {
        self.distance_bearing(other).map(|(d, _)| d)
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

pub(crate) fn parse_number(field: &'static str, text: &str) -> Result<f64, ParseError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::NotANumber {
            field,
            text: text.to_string(),
        })
}

fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid may round tiny negatives up to exactly 360.0
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Rectangle handed to map renderers. Corners are not range checked: a margin
/// near the poles or the antimeridian may push them out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LatLon,
    pub max: LatLon,
}

impl BoundingBox {
    /// Degenerate box covering a single point.
    pub fn around(point: LatLon) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box so it covers `point`; each of the four bounds moves independently.
    pub fn include(&mut self, point: &LatLon) {
        self.min.lat = self.min.lat.min(point.lat);
        self.min.lon = self.min.lon.min(point.lon);
        self.max.lat = self.max.lat.max(point.lat);
        self.max.lon = self.max.lon.max(point.lon);
    }

    pub fn with_margin(self, margin: f64) -> Self {
        Self {
            min: LatLon::new(self.min.lat - margin, self.min.lon - margin),
            max: LatLon::new(self.max.lat + margin, self.max.lon + margin),
        }
    }
}
