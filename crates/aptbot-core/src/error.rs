// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use std::path::PathBuf;
use thiserror::Error;

/// Malformed numeric or coordinate text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("cannot parse {field} '{text}'")]
    NotANumber { field: &'static str, text: String },
    #[error("invalid {field} '{text}': out of range")]
    OutOfRange { field: &'static str, text: String },
}

/// Unresolved foreign key.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("unknown country code '{0}'")]
    Country(String),
    #[error("cannot find airport by ICAO '{0}'")]
    Airport(String),
}

/// Failure to turn one tabular row into an entity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} data items, got {found}")]
    Schema { expected: usize, found: usize },
    #[error("{context}: {source}")]
    Parse {
        context: &'static str,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl RecordError {
    pub(crate) fn parse(context: &'static str, source: ParseError) -> Self {
        Self::Parse { context, source }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{file}:{line} could not parse {kind}: {source}")]
    Record {
        file: String,
        line: usize,
        kind: &'static str,
        #[source]
        source: RecordError,
    },
    #[error("countries with same code '{code}': '{first}', '{second}'")]
    DuplicateCountry {
        code: String,
        first: String,
        second: String,
    },
    #[error("airports with same ICAO code '{icao}': '{first}', '{second}'")]
    DuplicateAirport {
        icao: String,
        first: String,
        second: String,
    },
    #[error("{file}:{line} {source}")]
    UnknownAirport {
        file: String,
        line: usize,
        #[source]
        source: LookupError,
    },
    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectError {
    #[error("no interesting airport to pick from")]
    EmptyPool,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
