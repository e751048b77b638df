// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::RecordError;
use crate::geo::{parse_number, LatLon};
use serde::{Deserialize, Serialize};

pub const RUNWAY_FIELDS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    pub airport_code: String,
    pub surface: String,
    pub length_ft: f64,
    pub width_ft: f64,
    /// [`LatLon::INVALID`] when the dataset has no position for this end.
    pub low_end: LatLon,
    pub high_end: LatLon,
}

impl Runway {
    /// Builds a runway from a `runways.csv` row.
    ///
    /// Columns used: 2 airport_ident, 3 length_ft, 4 width_ft, 5 surface,
    /// 9/10 le_latitude_deg/le_longitude_deg, 15/16 he_latitude_deg/he_longitude_deg.
    /// Empty length/width become 0.0 and an end with no coordinates at all
    /// becomes [`LatLon::INVALID`]; anything else must parse.
    pub fn from_record<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() != RUNWAY_FIELDS {
            return Err(RecordError::Schema {
                expected: RUNWAY_FIELDS,
                found: fields.len(),
            });
        }
        let f = |i: usize| fields[i].as_ref();

        let length_ft = parse_dimension("length", f(3))?;
        let width_ft = parse_dimension("width", f(4))?;
        let low_end = parse_end("failed to parse lat/lon coordinates of LE", f(9), f(10))?;
        let high_end = parse_end("failed to parse lat/lon coordinates of HE", f(15), f(16))?;

        Ok(Self {
            airport_code: f(2).to_uppercase(),
            surface: f(5).to_string(),
            length_ft,
            width_ft,
            low_end,
            high_end,
        })
    }

    pub fn has_both_ends(&self) -> bool {
        self.low_end.is_valid() && self.high_end.is_valid()
    }

    /// Distance between the two ends, `None` unless both are known.
    pub fn end_to_end_km(&self) -> Option<f64> {
        if !self.has_both_ends() {
            return None;
        }
        self.low_end.distance_km(&self.high_end).ok()
    }
}

fn parse_dimension(field: &'static str, text: &str) -> Result<f64, RecordError> {
    if text.is_empty() {
        return Ok(0.0);
    }
    parse_number(field, text).map_err(|e| RecordError::parse("failed to parse runway dimension", e))
}

fn parse_end(context: &'static str, lat: &str, lon: &str) -> Result<LatLon, RecordError> {
    if lat.is_empty() && lon.is_empty() {
        return Ok(LatLon::INVALID);
    }
    LatLon::parse(lat, lon).map_err(|e| RecordError::parse(context, e))
}
