// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::country::Country;
use crate::error::{LookupError, RecordError};
use crate::geo::{BoundingBox, LatLon};
use crate::runway::Runway;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

pub const AIRPORT_FIELDS: usize = 18;

/// Runway ends further than this from the airport reference point are
/// considered bogus data.
pub const EXCESSIVE_RUNWAY_KM: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirportType {
    Large,
    Medium,
    Small,
    Other,
}

impl AirportType {
    pub fn from_dataset(s: &str) -> Self {
        match s {
            "large_airport" => AirportType::Large,
            "medium_airport" => AirportType::Medium,
            "small_airport" => AirportType::Small,
            _ => AirportType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AirportType::Large => "large_airport",
            AirportType::Medium => "medium_airport",
            AirportType::Small => "small_airport",
            AirportType::Other => "other",
        }
    }
}

/// Where [`Airport::add_runway`] put a runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunwayPlacement {
    Regular,
    Excessive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub airport_type: AirportType,
    pub name: String,
    pub icao: String,
    /// `None` when unassigned or identical to the ICAO code.
    pub iata: Option<String>,
    pub country: Rc<Country>,
    pub city: String,
    pub position: LatLon,
    pub website: String,
    pub wikipedia: String,
    pub runways: Vec<Runway>,
    /// Runways with missing or implausible positions. Never used for geometry.
    pub excessive_runways: Vec<Runway>,
}

impl Airport {
    /// Builds an airport from an `airports.csv` row.
    ///
    /// Column contract (0-based): 1 ident, 2 type, 3 name, 4 latitude_deg,
    /// 5 longitude_deg, 8 iso_country, 10 municipality, 13 iata_code,
    /// 15 home_link, 16 wikipedia_link.
    pub fn from_record<S: AsRef<str>>(
        fields: &[S],
        countries: &HashMap<String, Rc<Country>>,
    ) -> Result<Self, RecordError> {
        if fields.len() != AIRPORT_FIELDS {
            return Err(RecordError::Schema {
                expected: AIRPORT_FIELDS,
                found: fields.len(),
            });
        }
        let f = |i: usize| fields[i].as_ref();

        let icao = f(1).to_uppercase();
        let iata = Some(f(13).to_uppercase()).filter(|code| !code.is_empty() && *code != icao);

        let country = countries
            .get(f(8))
            .cloned()
            .ok_or_else(|| LookupError::Country(f(8).to_string()))?;

        let position = LatLon::parse(f(4), f(5))
            .map_err(|e| RecordError::parse("failed to parse lat/lon coordinates", e))?;

        Ok(Self {
            airport_type: AirportType::from_dataset(f(2)),
            name: f(3).to_string(),
            icao,
            iata,
            country,
            city: f(10).to_string(),
            position,
            website: f(15).to_string(),
            wikipedia: f(16).to_string(),
            runways: Vec::new(),
            excessive_runways: Vec::new(),
        })
    }

    /// Attaches a runway, quarantining it when neither end is known or when a
    /// known end lies more than `excessive_km` from the airport position.
    /// Distances that cannot be computed do not count against the runway.
    pub fn add_runway(&mut self, runway: Runway, excessive_km: f64) -> RunwayPlacement {
        let too_far = |end: &LatLon| {
            end.is_valid()
                && self
                    .position
                    .distance_km(end)
                    .map(|d| d > excessive_km)
                    .unwrap_or(false)
        };

        let placement = if !runway.low_end.is_valid() && !runway.high_end.is_valid() {
            RunwayPlacement::Excessive
        } else if too_far(&runway.low_end) || too_far(&runway.high_end) {
            RunwayPlacement::Excessive
        } else {
            RunwayPlacement::Regular
        };

        match placement {
            RunwayPlacement::Regular => self.runways.push(runway),
            RunwayPlacement::Excessive => self.excessive_runways.push(runway),
        }
        placement
    }

    /// Rectangle covering the airport position and every known end of its
    /// regular runways, grown by `margin` degrees on each side.
    pub fn bounding_box(&self, margin: f64) -> BoundingBox {
        let mut bb = BoundingBox::around(self.position);
        for runway in &self.runways {
            for end in [&runway.low_end, &runway.high_end] {
                if end.is_valid() {
                    bb.include(end);
                }
            }
        }
        bb.with_margin(margin)
    }
}
