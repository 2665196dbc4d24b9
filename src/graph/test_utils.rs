// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! This module is only compiled when running unit tests and contains helpers
//! that are shared by all tests of the `graph` module.
//!
//! - `sum` and `remainder`, which build terse group definitions whose label
//!   is their id.
//! - the `ScenarioBuilder`, which declaratively builds a value table and a
//!   two-level definition for use in tests.

use crate::{Aggregation, AggregationConfig, DefinitionGraph, Error, GroupDefinition, ValueTable};

/// Returns a group that sums the given codes.
pub(crate) fn sum<const N: usize>(id: &str, codes: [&str; N]) -> GroupDefinition {
    GroupDefinition::sum(id, id, "#000000", codes)
}

/// Returns a remainder group.
pub(crate) fn remainder(id: &str) -> GroupDefinition {
    GroupDefinition::remainder(id, id, "#ffffff")
}

/// Asserts that two floats are equal, within a relative tolerance of 1e-9.
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} is not close to {expected}"
    );
}

/// A builder for value tables and sector definitions, for use in tests.
///
/// Every sector gets a code named after its id in upper case, and every
/// subsector a code named `<SECTOR>.<subsector>`.
pub(crate) struct ScenarioBuilder {
    table: ValueTable,
    definitions: Vec<GroupDefinition>,
}

impl ScenarioBuilder {
    /// Creates a new `ScenarioBuilder` with the given total.
    pub(crate) fn new(total: f64) -> Self {
        Self {
            table: ValueTable::from([("TOTAL", total)]),
            definitions: Vec::new(),
        }
    }

    /// Adds a sector with the given value and explicit subsectors.
    pub(crate) fn sector(
        &mut self,
        id: &str,
        value: f64,
        subsectors: &[(&str, f64)],
    ) -> &mut Self {
        let code = id.to_uppercase();
        self.table.insert(code.clone(), value);

        let mut children = Vec::new();
        for (sub_id, sub_value) in subsectors {
            let sub_code = format!("{code}.{sub_id}");
            self.table.insert(sub_code.clone(), *sub_value);
            children.push(GroupDefinition::sum(*sub_id, *sub_id, "#000000", [sub_code]));
        }
        if !children.is_empty() {
            children.push(remainder(&format!("{id}-rest")));
        }

        self.definitions
            .push(GroupDefinition::sum(id, id, "#000000", [code]).with_children(children));
        self
    }

    /// Adds a top-level remainder.
    pub(crate) fn rest(&mut self) -> &mut Self {
        self.definitions.push(remainder("rest"));
        self
    }

    pub(crate) fn table(&self) -> &ValueTable {
        &self.table
    }

    pub(crate) fn definitions(&self) -> &[GroupDefinition] {
        &self.definitions
    }

    /// Builds the definition graph and aggregates the table over it.
    pub(crate) fn aggregate(
        &self,
        config: Option<AggregationConfig>,
    ) -> Result<Aggregation, Error> {
        DefinitionGraph::try_new(self.definitions.clone(), config.unwrap_or_default())?
            .aggregate(&self.table, "TOTAL")
    }
}
