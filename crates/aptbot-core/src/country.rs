// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::RecordError;
use serde::{Deserialize, Serialize};

pub const COUNTRY_FIELDS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    /// Builds a country from a `countries.csv` row:
    /// id, code, name, continent, wikipedia_link, keywords.
    pub fn from_record<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() != COUNTRY_FIELDS {
            return Err(RecordError::Schema {
                expected: COUNTRY_FIELDS,
                found: fields.len(),
            });
        }

        Ok(Self {
            code: fields[1].as_ref().to_string(),
            name: fields[2].as_ref().to_string(),
        })
    }
}
