// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::{Airport, AirportType};
use crate::classify::is_interesting;
use crate::error::SelectError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Weighted list of candidate airports. Large airports appear twice, which
/// doubles their odds against medium ones.
#[derive(Debug, Default)]
pub struct CandidatePool<'a> {
    entries: Vec<&'a Airport>,
}

impl<'a> CandidatePool<'a> {
    /// Builds the pool from every interesting airport in `airports`.
    pub fn build<I>(airports: I, min_runway_km: f64) -> Self
    where
        I: IntoIterator<Item = &'a Airport>,
    {
        let mut pool = Self::default();
        let mut interesting = 0usize;
        for airport in airports {
            if is_interesting(airport, min_runway_km) {
                pool.push(airport);
                interesting += 1;
            }
        }
        log::info!(
            "{} interesting airports, candidate pool has {} entries",
            interesting,
            pool.len()
        );
        pool
    }

    /// Adds an airport that is already known to be interesting.
    pub fn push(&mut self, airport: &'a Airport) {
        self.entries.push(airport);
        if airport.airport_type == AirportType::Large {
            self.entries.push(airport);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct airports in the pool, in insertion order.
    pub fn airports(&self) -> impl Iterator<Item = &'a Airport> + '_ {
        let mut last: Option<&'a str> = None;
        self.entries.iter().copied().filter(move |&a| {
            let dup = last == Some(a.icao.as_str());
            last = Some(a.icao.as_str());
            !dup
        })
    }

    /// Uniform pick over the pool entries.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a Airport, SelectError> {
        match self.entries.choose(rng) {
            Some(airport) => {
                log::info!(
                    "Selected {} ({}, {})",
                    airport.icao,
                    airport.name,
                    airport.airport_type.as_str()
                );
                Ok(*airport)
            }
            None => {
                log::warn!("No interesting airport found; nothing to pick");
                Err(SelectError::EmptyPool)
            }
        }
    }
}
