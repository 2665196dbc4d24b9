// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! This module contains the configuration options for the `DefinitionGraph`
//! and the aggregation passes run over it.

use serde::Deserialize;

/// What to do when a group references a code that is neither in the value
/// table nor an already computed group id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCodePolicy {
    /// Abort the aggregation with a `MissingCode` error.
    #[default]
    Fail,
    /// Treat the missing contribution as zero and report it in the
    /// diagnostics of the returned [`Aggregation`][crate::Aggregation].
    ZeroWithWarning,
}

/// Configuration options for the `DefinitionGraph`.
#[derive(Clone, Default, Debug, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// How codes missing from the value table are handled.
    pub on_missing_code: MissingCodePolicy,

    /// Whether the same code may be summed into more than one explicit
    /// sibling group.  When this is `false`, such definitions are rejected
    /// with a `DuplicateCodeUsage` error.
    pub allow_shared_codes: bool,
}
