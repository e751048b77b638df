// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::{Airport, RunwayPlacement};
use crate::config::Thresholds;
use crate::country::Country;
use crate::error::{LoadError, LookupError};
use crate::runway::Runway;
use log::{debug, info};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::rc::Rc;

pub const COUNTRIES_FILE: &str = "countries.csv";
pub const AIRPORTS_FILE: &str = "airports.csv";
pub const RUNWAYS_FILE: &str = "runways.csv";

/// Airports keyed by ICAO code, in code order.
pub type AirportMap = BTreeMap<String, Airport>;

/// Raw rows of one CSV file. Row 0 is the header.
///
/// `lines` holds the 1-based file line each row starts on; a quoted field with
/// an embedded newline makes it run ahead of the row index.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub name: String,
    rows: Vec<Vec<String>>,
    lines: Vec<usize>,
}

impl Table {
    /// In-memory table where row `i` sits on line `i + 1`.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        let lines = (1..=rows.len()).collect();
        Self {
            name: name.into(),
            rows,
            lines,
        }
    }

    /// Appends a row on the line after the last one.
    pub fn push(&mut self, row: Vec<String>) {
        let line = self.lines.last().map_or(1, |l| l + 1);
        self.rows.push(row);
        self.lines.push(line);
    }

    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let csv_err = |source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };

        // Flexible so that short/long rows reach the record parsers and fail
        // there with a field count message.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;

        let mut rows = Vec::new();
        let mut lines = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(csv_err)?;
            let line = record
                .position()
                .map_or(rows.len() + 1, |pos| pos.line() as usize);
            rows.push(record.iter().map(|s| s.to_string()).collect());
            lines.push(line);
        }

        debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(Self {
            name: path.display().to_string(),
            rows,
            lines,
        })
    }

    /// Data rows with the file line each one starts on.
    fn records(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, row)| (self.lines.get(i).copied().unwrap_or(i + 1), row.as_slice()))
    }
}

/// Reads `countries.csv`, `airports.csv` and `runways.csv` from `dir` and loads them.
pub fn load_dir<P: AsRef<Path>>(dir: P, thresholds: &Thresholds) -> Result<AirportMap, LoadError> {
    let dir = dir.as_ref();
    let countries = Table::read_csv(dir.join(COUNTRIES_FILE))?;
    let airports = Table::read_csv(dir.join(AIRPORTS_FILE))?;
    let runways = Table::read_csv(dir.join(RUNWAYS_FILE))?;
    load(&countries, &airports, &runways, thresholds)
}

/// Builds the airport graph. The first bad row, duplicate key or dangling
/// reference aborts the whole load.
pub fn load(
    countries: &Table,
    airports: &Table,
    runways: &Table,
    thresholds: &Thresholds,
) -> Result<AirportMap, LoadError> {
    let countries_by_code = load_countries(countries)?;
    let mut airports_by_icao = load_airports(airports, &countries_by_code)?;

    let mut regular = 0usize;
    let mut excessive = 0usize;
    for (line, fields) in runways.records() {
        let runway = Runway::from_record(fields).map_err(|source| LoadError::Record {
            file: runways.name.clone(),
            line,
            kind: "runway",
            source,
        })?;

        let Some(airport) = airports_by_icao.get_mut(&runway.airport_code) else {
            return Err(LoadError::UnknownAirport {
                file: runways.name.clone(),
                line,
                source: LookupError::Airport(runway.airport_code),
            });
        };

        match airport.add_runway(runway, thresholds.excessive_runway_km) {
            RunwayPlacement::Regular => regular += 1,
            RunwayPlacement::Excessive => {
                debug!("{}:{} runway of {} quarantined", runways.name, line, airport.icao);
                excessive += 1;
            }
        }
    }

    info!(
        "Loaded {} countries, {} airports, {} runways ({} excessive)",
        countries_by_code.len(),
        airports_by_icao.len(),
        regular + excessive,
        excessive
    );
    Ok(airports_by_icao)
}

fn load_countries(table: &Table) -> Result<HashMap<String, Rc<Country>>, LoadError> {
    let mut by_code: HashMap<String, Rc<Country>> = HashMap::new();
    for (line, fields) in table.records() {
        let country = Country::from_record(fields).map_err(|source| LoadError::Record {
            file: table.name.clone(),
            line,
            kind: "country",
            source,
        })?;

        if let Some(existing) = by_code.get(&country.code) {
            return Err(LoadError::DuplicateCountry {
                code: country.code,
                first: existing.name.clone(),
                second: country.name,
            });
        }
        by_code.insert(country.code.clone(), Rc::new(country));
    }
    Ok(by_code)
}

fn load_airports(
    table: &Table,
    countries: &HashMap<String, Rc<Country>>,
) -> Result<AirportMap, LoadError> {
    let mut by_icao = AirportMap::new();
    for (line, fields) in table.records() {
        let airport = Airport::from_record(fields, countries).map_err(|source| LoadError::Record {
            file: table.name.clone(),
            line,
            kind: "airport",
            source,
        })?;

        if let Some(existing) = by_icao.get(&airport.icao) {
            return Err(LoadError::DuplicateAirport {
                icao: airport.icao,
                first: existing.name.clone(),
                second: airport.name,
            });
        }
        by_icao.insert(airport.icao.clone(), airport);
    }
    Ok(by_icao)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::tests::airport_row;
    use crate::error::RecordError;
    use crate::runway::tests::runway_row;

    fn country_table() -> Table {
        Table::new(
            "countries.csv",
            vec![
                vec!["id", "code", "name", "continent", "wikipedia_link", "keywords"],
                vec!["1", "DE", "Germany", "EU", "", ""],
                vec!["2", "US", "United States", "NA", "", ""],
            ]
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect(),
        )
    }

    fn header(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("col{}", i)).collect()
    }

    fn airport_table(rows: Vec<Vec<String>>) -> Table {
        let mut all = vec![header(18)];
        all.extend(rows);
        Table::new("airports.csv", all)
    }

    fn runway_table(rows: Vec<Vec<String>>) -> Table {
        let mut all = vec![header(20)];
        all.extend(rows);
        Table::new("runways.csv", all)
    }

    #[test]
    fn test_load_joins_runways() {
        let airports = airport_table(vec![
            airport_row("EDDF", "large_airport", "50.0", "10.0", "DE", "FRA"),
            airport_row("KSEA", "large_airport", "47.45", "-122.3", "US", "SEA"),
        ]);
        let runways = runway_table(vec![
            runway_row("eddf", "13000", ("50.01", "10.0"), ("49.99", "10.0")),
            runway_row("EDDF", "9000", ("", ""), ("", "")),
            runway_row("KSEA", "11900", ("47.46", "-122.31"), ("47.43", "-122.31")),
        ]);

        let map = load(&country_table(), &airports, &runways, &Thresholds::default()).unwrap();
        assert_eq!(map.len(), 2);
        let eddf = &map["EDDF"];
        assert_eq!(eddf.runways.len(), 1);
        assert_eq!(eddf.excessive_runways.len(), 1);
        assert_eq!(eddf.country.name, "Germany");
        assert_eq!(map["KSEA"].runways.len(), 1);
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["EDDF", "KSEA"],
            "keys are ordered"
        );
    }

    #[test]
    fn test_header_only_tables() {
        let map = load(
            &country_table(),
            &airport_table(vec![]),
            &runway_table(vec![]),
            &Thresholds::default(),
        )
        .unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicate_country() {
        let mut countries = country_table();
        countries.push(
            ["3", "DE", "Deutschland", "EU", "", ""]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        let err = load(
            &countries,
            &airport_table(vec![]),
            &runway_table(vec![]),
            &Thresholds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateCountry { ref code, .. } if code == "DE"));
    }

    #[test]
    fn test_duplicate_icao_is_case_insensitive() {
        let airports = airport_table(vec![
            airport_row("EDDF", "large_airport", "50.0", "10.0", "DE", ""),
            airport_row("eddf", "medium_airport", "50.0", "10.0", "DE", ""),
        ]);
        let err = load(
            &country_table(),
            &airports,
            &runway_table(vec![]),
            &Thresholds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateAirport { ref icao, .. } if icao == "EDDF"));
    }

    #[test]
    fn test_bad_airport_row_reports_line() {
        let airports = airport_table(vec![
            airport_row("EDDF", "large_airport", "50.0", "10.0", "DE", ""),
            airport_row("LFPG", "large_airport", "49.0", "2.5", "FR", ""),
        ]);
        let err = load(
            &country_table(),
            &airports,
            &runway_table(vec![]),
            &Thresholds::default(),
        )
        .unwrap_err();
        match err {
            LoadError::Record {
                file,
                line,
                kind,
                source,
            } => {
                assert_eq!(file, "airports.csv");
                assert_eq!(line, 3);
                assert_eq!(kind, "airport");
                assert_eq!(
                    source,
                    RecordError::Lookup(LookupError::Country("FR".to_string()))
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_runway_row() {
        let runways = runway_table(vec![vec!["1".to_string(); 7]]);
        let err = load(
            &country_table(),
            &airport_table(vec![]),
            &runways,
            &Thresholds::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Record {
                line: 2,
                source: RecordError::Schema {
                    expected: 20,
                    found: 7
                },
                ..
            }
        ));
    }

    #[test]
    fn test_runway_for_unknown_airport() {
        let airports = airport_table(vec![airport_row(
            "EDDF",
            "large_airport",
            "50.0",
            "10.0",
            "DE",
            "",
        )]);
        let runways = runway_table(vec![runway_row("EDDM", "1000", ("", ""), ("", ""))]);
        let err = load(&country_table(), &airports, &runways, &Thresholds::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownAirport {
                line: 2,
                source: LookupError::Airport(ref code),
                ..
            } if code == "EDDM"
        ));
        assert!(err.to_string().contains("runways.csv:2"));
    }

    #[test]
    fn test_read_csv_tracks_physical_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(COUNTRIES_FILE);
        std::fs::write(
            &path,
            "id,code,name,continent,wikipedia_link,keywords\n\
             1,DE,Germany,EU,,\"Flughafen\nAirport\"\n\
             2,US,United States,NA,,\n",
        )
        .unwrap();

        let table = Table::read_csv(&path).unwrap();
        assert_eq!(table.rows.len(), 3);
        let lines: Vec<usize> = table.records().map(|(line, _)| line).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_pushed_rows_continue_numbering() {
        let mut countries = country_table();
        countries.push(vec!["3".to_string(); 2]);
        let err = load(
            &countries,
            &airport_table(vec![]),
            &runway_table(vec![]),
            &Thresholds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Record { line: 4, .. }));
    }
}
