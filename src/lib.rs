// License: MIT
// Copyright © 2024 The emissions-wedges Authors

/*!
# Emission Wedges

This is a library for aggregating a flat table of coded quantities, like a
national greenhouse gas inventory keyed by CRF codes, into named groups that
are drawn as the wedges of a multi-ring pie chart.

## Group definitions

Groups are described by a forest of [`GroupDefinition`]s.  A group either sums
a list of codes, or is the *remainder* of its level: whatever the level's
reference value is left with after subtracting all explicit siblings.  A
group can be broken down further into child groups, which use the value of
their parent as their reference.

Definitions can be built in code, or parsed from JSON or YAML with
[`GroupDefinition::forest_from_json`] and
[`GroupDefinition::forest_from_yaml`].

## Validation

A [`DefinitionGraph`] is created from the definitions with
[`try_new`][DefinitionGraph::try_new], which checks that:

- Group ids are non-empty and unique.
- Every level has at most one remainder group.
- No code is summed by more than one group of the same level, unless
  [`AggregationConfig::allow_shared_codes`] is set.

If any of the validation steps fail, the method will return an [`Error`], and
nothing is computed.

## Aggregation

[`DefinitionGraph::aggregate`] computes the value of every group from a
[`ValueTable`] and returns an [`Aggregation`], holding:

- the input table augmented with one entry per group id,
- the fraction of its level's reference value for every group,
- the formula every value was computed from,
- the [`Wedge`]s ready to be drawn, ring by ring,
- and the [`Diagnostic`]s of problems that were recovered from.

Missing codes fail the aggregation by default; with
[`MissingCodePolicy::ZeroWithWarning`] they are counted as zero instead.

The [`aggregate`] and [`aggregate_with_config`] functions do both steps at
once.

## Presentation

The [`sectors`] module holds the standard emission sectors and their
breakdown, [`narrative`] and [`format`] render the accompanying Czech texts,
and [`export`] writes the CSV files consumed by the chart templates.
*/

mod config;
pub use config::{AggregationConfig, MissingCodePolicy};

mod definition;
pub use definition::{GroupDefinition, GroupKind};

mod graph;
pub use graph::{
    aggregate, aggregate_with_config, iterators, Aggregation, DefinitionGraph, Diagnostic,
    FractionTable, Group, Wedge,
};

mod error;
pub use error::{Error, ErrorKind};

mod value_table;
pub use value_table::ValueTable;

pub mod export;
pub mod format;
pub mod geo;
pub mod narrative;
pub mod sectors;
