// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod airport;
pub mod classify;
pub mod config;
pub mod country;
pub mod error;
pub mod geo;
pub mod loader;
pub mod message;
pub mod publish;
pub mod runway;
pub mod select;

pub use airport::{Airport, AirportType};
pub use config::{BotConfig, Thresholds};
pub use error::{LoadError, SelectError};
pub use geo::{BoundingBox, LatLon};
pub use loader::AirportMap;
pub use select::CandidatePool;

use serde::Serialize;

/// Counts reported by `aptbot stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Countries with at least one airport.
    pub countries: usize,
    pub airports: usize,
    pub runways: usize,
    pub excessive_runways: usize,
    pub interesting_large: usize,
    pub interesting_medium: usize,
    pub pool_size: usize,
}

impl DatasetStats {
    pub fn collect(airports: &AirportMap, thresholds: &Thresholds) -> Self {
        let mut stats = DatasetStats {
            airports: airports.len(),
            ..Default::default()
        };
        let mut countries = std::collections::HashSet::new();

        for airport in airports.values() {
            countries.insert(airport.country.code.as_str());
            stats.runways += airport.runways.len() + airport.excessive_runways.len();
            stats.excessive_runways += airport.excessive_runways.len();
            if classify::is_interesting(airport, thresholds.min_runway_km) {
                match airport.airport_type {
                    AirportType::Large => stats.interesting_large += 1,
                    _ => stats.interesting_medium += 1,
                }
            }
        }

        stats.countries = countries.len();
        stats.pool_size = 2 * stats.interesting_large + stats.interesting_medium;
        stats
    }
}
