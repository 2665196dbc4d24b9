// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Methods for retrieving groups and their relations from a
//! [`DefinitionGraph`].

use petgraph::graph::NodeIndex;

use crate::iterators::{Groups, Siblings};
use crate::{DefinitionGraph, Error};

use super::Group;

/// `Group` retrieval.
impl DefinitionGraph {
    /// Returns the group with the given `id`, if it exists.
    pub fn group(&self, id: &str) -> Result<&Group, Error> {
        self.index(id).map(|i| &self.graph[i])
    }

    /// Returns an iterator over all the groups in the graph, parents before
    /// their children, siblings in declaration order.
    pub fn groups(&self) -> Groups<'_> {
        Groups {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the top-level groups.
    pub fn top_level(&self) -> Siblings<'_> {
        Siblings {
            graph: &self.graph,
            iter: self.top_level.clone().into_iter(),
        }
    }

    /// Returns an iterator over the breakdown of the group with the given
    /// `id`.
    ///
    /// Returns an error if the given `id` does not exist.
    pub fn children(&self, id: &str) -> Result<Siblings<'_>, Error> {
        let index = self.index(id)?;
        Ok(Siblings {
            graph: &self.graph,
            iter: self.child_indices(index).into_iter(),
        })
    }

    /// Returns the group whose breakdown contains the group with the given
    /// `id`, or `None` for top-level groups.
    ///
    /// Returns an error if the given `id` does not exist.
    pub fn parent(&self, id: &str) -> Result<Option<&Group>, Error> {
        let index = self.index(id)?;
        Ok(self.parent_index(index).map(|i| &self.graph[i]))
    }

    /// Returns the nesting depth of the group with the given `id`, which is
    /// `0` for top-level groups.
    pub fn depth(&self, id: &str) -> Result<usize, Error> {
        let mut index = self.index(id)?;
        let mut depth = 0;
        while let Some(parent) = self.parent_index(index) {
            depth += 1;
            index = parent;
        }
        Ok(depth)
    }

    pub(crate) fn index(&self, id: &str) -> Result<NodeIndex, Error> {
        self.node_indices
            .get(id)
            .copied()
            .ok_or_else(|| Error::group_not_found(format!("Group with id {id} not found.")))
    }

    /// Returns the indices of the children of the given node, in declaration
    /// order.
    ///
    /// `petgraph` yields neighbors most recently added first, but nodes are
    /// added in declaration order, so sorting the indices restores it.
    pub(crate) fn child_indices(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self
            .graph
            .neighbors_directed(index, petgraph::Direction::Outgoing)
            .collect::<Vec<_>>();
        children.sort_unstable();
        children
    }

    pub(crate) fn parent_index(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(index, petgraph::Direction::Incoming)
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{remainder, sum};
    use crate::AggregationConfig;

    fn graph() -> Result<DefinitionGraph, Error> {
        DefinitionGraph::try_new(
            vec![
                sum("industry", ["CRF2", "CRF1A2"]).with_children([
                    sum("metal", ["CRF2C"]),
                    sum("mineral", ["CRF2A"]),
                    remainder("industry-rest"),
                ]),
                sum("transport", ["CRF1A3"]).with_children([
                    sum("cars", ["CRF1A3B1"])
                        .with_children([sum("diesel", ["D"]), sum("petrol", ["P"])]),
                    remainder("transport-rest"),
                ]),
                remainder("other"),
            ],
            AggregationConfig::default(),
        )
    }

    fn ids<'a>(groups: impl Iterator<Item = &'a Group>) -> Vec<&'a str> {
        groups.map(|g| g.id()).collect()
    }

    #[test]
    fn test_group() -> Result<(), Error> {
        let graph = graph()?;

        assert_eq!(graph.group("metal")?.kind(), sum("metal", ["CRF2C"]).kind());
        assert!(graph.group("other")?.is_remainder());
        assert_eq!(
            graph.group("buildings"),
            Err(Error::group_not_found("Group with id buildings not found."))
        );

        Ok(())
    }

    #[test]
    fn test_groups_in_declaration_order() -> Result<(), Error> {
        let graph = graph()?;

        assert_eq!(
            ids(graph.groups()),
            vec![
                "industry",
                "metal",
                "mineral",
                "industry-rest",
                "transport",
                "cars",
                "diesel",
                "petrol",
                "transport-rest",
                "other"
            ]
        );
        assert_eq!(ids(graph.top_level()), vec!["industry", "transport", "other"]);

        Ok(())
    }

    #[test]
    fn test_relations() -> Result<(), Error> {
        let graph = graph()?;

        assert_eq!(
            ids(graph.children("industry")?),
            vec!["metal", "mineral", "industry-rest"]
        );
        assert_eq!(ids(graph.children("cars")?), vec!["diesel", "petrol"]);
        assert_eq!(graph.children("other")?.count(), 0);
        assert!(graph
            .children("nope")
            .is_err_and(|e| e == Error::group_not_found("Group with id nope not found.")));

        assert_eq!(graph.parent("diesel")?.map(|g| g.id()), Some("cars"));
        assert_eq!(graph.parent("industry")?, None);

        assert_eq!(graph.depth("other")?, 0);
        assert_eq!(graph.depth("mineral")?, 1);
        assert_eq!(graph.depth("petrol")?, 2);

        Ok(())
    }
}
