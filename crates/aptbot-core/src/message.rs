// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::Airport;

/// Squeezes a place name into something usable as a hashtag.
/// Keeps letters and digits and stops at the first `(`, `/` or `,`.
pub fn sanitize_name(s: &str) -> String {
    s.chars()
        .take_while(|&c| !matches!(c, '(' | '/' | ','))
        .filter(|&c| c.is_alphanumeric())
        .collect()
}

pub fn openstreetmap_url(airport: &Airport) -> String {
    format!(
        "https://www.openstreetmap.org/#map=13/{:.6}/{:.6}",
        airport.position.lat, airport.position.lon
    )
}

pub fn hashtags(airport: &Airport, fixed: &[String]) -> Vec<String> {
    let mut tags = Vec::with_capacity(4 + fixed.len());
    let mut push = |name: &str| {
        if !name.is_empty() {
            tags.push(format!("#{}", name));
        }
    };

    push(&airport.icao);
    if let Some(iata) = &airport.iata {
        push(iata);
    }
    push(&sanitize_name(&airport.city));
    push(&sanitize_name(&airport.country.name));

    tags.extend(fixed.iter().cloned());
    tags
}

/// Status text for a post about `airport`.
pub fn compose_message(airport: &Airport, fixed_tags: &[String]) -> String {
    let mut msg = if airport.city.is_empty() {
        format!("{} - {}\n\n", airport.name, airport.country.name)
    } else {
        format!(
            "{} - {}, {}\n\n",
            airport.name, airport.city, airport.country.name
        )
    };

    if !airport.wikipedia.is_empty() {
        msg.push_str(&airport.wikipedia);
        msg.push('\n');
    }
    msg.push_str(&openstreetmap_url(airport));
    msg.push_str("\n\n");
    msg.push_str(&hashtags(airport, fixed_tags).join(" "));
    msg
}
