// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Iterators over groups in a `DefinitionGraph`.

use petgraph::graph::{DiGraph, NodeIndex};

use super::Group;

/// An iterator over all the groups in a `DefinitionGraph`, in declaration
/// order.
pub struct Groups<'a> {
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<Group>>,
}

impl<'a> Iterator for Groups<'a> {
    type Item = &'a Group;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over one sibling list of a `DefinitionGraph`, in declaration
/// order.
pub struct Siblings<'a> {
    pub(crate) graph: &'a DiGraph<Group, ()>,
    pub(crate) iter: std::vec::IntoIter<NodeIndex>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a Group;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
