// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! The presentation-facing view of an aggregation.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::{DefinitionGraph, Error, ValueTable};

use super::FractionTable;

/// A computed group, together with the metadata needed to render it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Wedge {
    id: String,
    qualified_id: String,
    parent_id: Option<String>,
    parent_qualified_id: Option<String>,
    label: String,
    color: String,
    value: f64,
    fraction: Option<f64>,
    depth: usize,
}

impl Wedge {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the id of the wedge prefixed by the qualified id of its parent,
    /// joined with `_`, for example `transport_cars`.
    pub fn qualified_id(&self) -> &str {
        &self.qualified_id
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Returns the qualified id of the parent wedge, which identifies it in
    /// exports.
    pub fn parent_qualified_id(&self) -> Option<&str> {
        self.parent_qualified_id.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the fraction of the parent's value (or of the total, for
    /// top-level wedges), if the parent's value is not zero.
    pub fn fraction(&self) -> Option<f64> {
        self.fraction
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Wedges without a label are not drawn nor exported.
    pub fn is_visible(&self) -> bool {
        !self.label.is_empty()
    }
}

impl DefinitionGraph {
    /// Builds the wedges for all the groups, in declaration order.
    pub(super) fn wedges(
        &self,
        values: &ValueTable,
        fractions: &FractionTable,
    ) -> Result<Vec<Wedge>, Error> {
        let mut wedges: Vec<Wedge> = Vec::with_capacity(self.graph.node_count());
        // Parents precede their children, so a parent's wedge is always
        // available when its children are visited.
        let mut positions: HashMap<NodeIndex, usize> = HashMap::new();

        for index in self.graph.node_indices() {
            let group = &self.graph[index];
            let parent = match self.parent_index(index) {
                Some(parent) => {
                    let position = positions.get(&parent).copied().ok_or_else(|| {
                        Error::internal(format!("Parent of group {} not visited.", group.id()))
                    })?;
                    Some(&wedges[position])
                }
                None => None,
            };

            let wedge = Wedge {
                id: group.id().to_string(),
                qualified_id: match parent {
                    Some(p) => format!("{}_{}", p.qualified_id, group.id()),
                    None => group.id().to_string(),
                },
                parent_id: parent.map(|p| p.id.clone()),
                parent_qualified_id: parent.map(|p| p.qualified_id.clone()),
                label: group.label().to_string(),
                color: group.color().to_string(),
                value: values.get(group.id())?,
                fraction: fractions.get(group.id()).copied(),
                depth: parent.map_or(0, |p| p.depth + 1),
            };
            positions.insert(index, wedges.len());
            wedges.push(wedge);
        }

        Ok(wedges)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::test_utils::{remainder, sum};
    use crate::{aggregate, Error, ValueTable};

    #[test]
    fn test_deep_wedges() -> Result<(), Error> {
        let table = ValueTable::from([("TOTAL", 10.0), ("A", 6.0), ("A1", 4.0), ("A11", 1.5)]);
        let definitions = [
            sum("a", ["A"]).with_children([
                sum("a1", ["A1"]).with_children([sum("a11", ["A11"]), remainder("a1-rest")])
            ]),
            remainder("rest"),
        ];
        let aggregation = aggregate(&table, &definitions, "TOTAL")?;

        let summary = aggregation
            .wedges()
            .iter()
            .map(|w| {
                (
                    w.qualified_id(),
                    w.parent_id(),
                    w.parent_qualified_id(),
                    w.depth(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("a", None, None, 0),
                ("a_a1", Some("a"), Some("a"), 1),
                ("a_a1_a11", Some("a1"), Some("a_a1"), 2),
                ("a_a1_a1-rest", Some("a1"), Some("a_a1"), 2),
                ("rest", None, None, 0),
            ]
        );
        assert_eq!(aggregation.value("a1-rest"), Ok(2.5));
        Ok(())
    }
}
