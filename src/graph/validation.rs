// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Methods for validating a [`DefinitionGraph`].

mod validate_siblings;

use petgraph::graph::NodeIndex;

use crate::{DefinitionGraph, Error};

pub(crate) struct DefinitionGraphValidator<'a> {
    dg: &'a DefinitionGraph,
}

/// A sibling list of the graph, together with a name for it that can be used
/// in error messages.
pub(crate) struct Level {
    name: String,
    members: Vec<NodeIndex>,
}

impl DefinitionGraph {
    /// Validates every sibling list of the graph.
    ///
    /// This runs before any values are computed, so that an invalid
    /// definition never produces a partial aggregation.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let validator = DefinitionGraphValidator { dg: self };

        for level in validator.levels() {
            validator.validate_remainders(&level)?;
            if !self.config.allow_shared_codes {
                validator.validate_exclusive_codes(&level)?;
            }
        }

        Ok(())
    }
}

impl DefinitionGraphValidator<'_> {
    /// Returns the top-level sibling list followed by the breakdown of every
    /// group that has one.
    fn levels(&self) -> Vec<Level> {
        let mut levels = vec![Level {
            name: String::from("the top level"),
            members: self.dg.top_level.clone(),
        }];
        for index in self.dg.graph.node_indices() {
            let members = self.dg.child_indices(index);
            if !members.is_empty() {
                levels.push(Level {
                    name: format!("the breakdown of {}", self.dg.graph[index].id()),
                    members,
                });
            }
        }
        levels
    }
}
