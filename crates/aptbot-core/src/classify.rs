// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::{Airport, AirportType};
use crate::runway::Runway;

/// Shortest end-to-end distance for a runway to count towards notability.
pub const MIN_RUNWAY_KM: f64 = 1.0;

pub const MIN_LARGE_RUNWAYS: usize = 1;
pub const MIN_MEDIUM_RUNWAYS: usize = 3;

fn is_interesting_runway(runway: &Runway, min_runway_km: f64) -> bool {
    runway
        .end_to_end_km()
        .map(|d| d >= min_runway_km)
        .unwrap_or(false)
}

/// Number of regular runways with both ends known and at least `min_runway_km` long.
pub fn interesting_runway_count(airport: &Airport, min_runway_km: f64) -> usize {
    airport
        .runways
        .iter()
        .filter(|r| is_interesting_runway(r, min_runway_km))
        .count()
}

/// Large airports need one long runway, medium airports three; nothing else qualifies.
pub fn is_interesting(airport: &Airport, min_runway_km: f64) -> bool {
    let required = match airport.airport_type {
        AirportType::Large => MIN_LARGE_RUNWAYS,
        AirportType::Medium => MIN_MEDIUM_RUNWAYS,
        AirportType::Small | AirportType::Other => return false,
    };
    interesting_runway_count(airport, min_runway_km) >= required
}
