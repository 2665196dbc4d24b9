// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! A graph representation of a forest of group definitions, over which value
//! tables can be aggregated.

mod aggregation;
mod creation;
mod retrieval;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

pub use aggregation::{
    aggregate, aggregate_with_config, Aggregation, Diagnostic, FractionTable, Wedge,
};

use crate::{AggregationConfig, GroupKind};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// `Group`s stored in a `DiGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any group id, so
/// that groups in the `DiGraph` can be retrieved from their ids.
pub(crate) type NodeIndexMap = HashMap<String, NodeIndex>;

/// A single group of a [`DefinitionGraph`], without its breakdown.
///
/// The breakdown is represented by the edges of the graph and can be
/// retrieved with [`DefinitionGraph::children`].
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    id: String,
    label: String,
    color: String,
    kind: GroupKind,
}

impl Group {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> &GroupKind {
        &self.kind
    }

    pub fn is_remainder(&self) -> bool {
        self.kind == GroupKind::Remainder
    }
}

/// A graph representation of group definitions and the breakdowns between
/// them.
///
/// Nodes are inserted in declaration order (parents before their children),
/// so the order of the node indices is the order in which the groups are
/// presented.
pub struct DefinitionGraph {
    graph: DiGraph<Group, ()>,
    node_indices: NodeIndexMap,
    top_level: Vec<NodeIndex>,
    config: AggregationConfig,
}
