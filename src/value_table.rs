// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! This module defines the `ValueTable`, a flat mapping from classification
//! codes to quantities, which is the input and output of an aggregation.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A mapping from codes to values.
///
/// All values in one table are expected to share the same unit, for example
/// megatons of CO2 equivalent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTable {
    values: BTreeMap<String, f64>,
}

/// A single `code,value` record, as read from CSV exports.
#[derive(Debug, Deserialize)]
struct ValueRecord {
    code: String,
    value: f64,
}

impl ValueTable {
    /// Creates an empty `ValueTable`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for the given code.
    ///
    /// Returns a `MissingCode` error if the code is not in the table.
    pub fn get(&self, code: &str) -> Result<f64, Error> {
        self.value(code).ok_or_else(|| {
            Error::missing_code(format!("Code {code} not found in the value table."))
        })
    }

    /// Returns the value for the given code, if it exists.
    pub fn value(&self, code: &str) -> Option<f64> {
        self.values.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.values.contains_key(code)
    }

    /// Inserts a value, returning the value previously stored under the same
    /// code, if any.
    pub fn insert(&mut self, code: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(code.into(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the `(code, value)` pairs, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns a new table in which `code` holds the sum of the given
    /// component codes.
    ///
    /// Statistical sources occasionally retire a published total; this
    /// rebuilds it from the components that are still published.  An
    /// existing entry for `code` is replaced.
    pub fn with_composite<C: AsRef<str>>(
        &self,
        code: impl Into<String>,
        components: impl IntoIterator<Item = C>,
    ) -> Result<Self, Error> {
        let code = code.into();
        let mut total = 0.0;
        for component in components {
            total += self.get(component.as_ref()).map_err(|e| {
                Error::missing_code(format!("Can't build composite {code}: {}", e.description()))
            })?;
        }
        let mut table = self.clone();
        table.insert(code, total);
        Ok(table)
    }

    /// Reads a table from CSV data with `code` and `value` columns.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for result in rdr.deserialize::<ValueRecord>() {
            let record = result.map_err(|e| Error::parse(format!("Invalid value record: {e}")))?;
            if table.insert(record.code.clone(), record.value).is_some() {
                return Err(Error::parse(format!(
                    "Duplicate code found in value records: {}",
                    record.code
                )));
            }
        }
        Ok(table)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ValueTable {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for ValueTable {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
