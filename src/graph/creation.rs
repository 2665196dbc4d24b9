// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Methods for creating [`DefinitionGraph`] instances from given group
//! definitions.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{AggregationConfig, Error, GroupDefinition};

use super::{DefinitionGraph, Group, NodeIndexMap};

/// `DefinitionGraph` instantiation.
impl DefinitionGraph {
    /// Creates a new [`DefinitionGraph`] from the given top-level definitions.
    ///
    /// Returns an error if the definitions are invalid.
    pub fn try_new(
        definitions: impl IntoIterator<Item = GroupDefinition>,
        config: AggregationConfig,
    ) -> Result<Self, Error> {
        let mut dg = Self {
            graph: DiGraph::new(),
            node_indices: NodeIndexMap::new(),
            top_level: Vec::new(),
            config,
        };

        for definition in definitions {
            let idx = dg.add_definition(definition, None)?;
            dg.top_level.push(idx);
        }

        dg.validate()?;

        Ok(dg)
    }

    fn add_definition(
        &mut self,
        definition: GroupDefinition,
        parent: Option<NodeIndex>,
    ) -> Result<NodeIndex, Error> {
        let GroupDefinition {
            id,
            label,
            color,
            kind,
            children,
        } = definition;

        if id.is_empty() {
            return Err(Error::invalid_definition(
                "Group definitions must have a non-empty id.",
            ));
        }
        if self.node_indices.contains_key(&id) {
            return Err(Error::duplicate_group_id(format!(
                "Duplicate group id found: {id}"
            )));
        }

        tracing::trace!("Adding group {} to the definition graph.", id);

        let idx = self.graph.add_node(Group {
            id: id.clone(),
            label,
            color,
            kind,
        });
        self.node_indices.insert(id, idx);
        if let Some(parent) = parent {
            self.graph.add_edge(parent, idx, ());
        }

        for child in children {
            self.add_definition(child, Some(idx))?;
        }

        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{remainder, sum};

    #[test]
    fn test_group_ids() {
        let config = AggregationConfig::default();
        let mut definitions = vec![
            sum("a", ["A"]).with_children([sum("a1", ["A1"]), remainder("a-rest")]),
            sum("b", ["B"]),
        ];

        assert!(DefinitionGraph::try_new(definitions.clone(), config.clone()).is_ok());

        definitions.push(remainder("a1"));
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone())
                .is_err_and(|e| e == Error::duplicate_group_id("Duplicate group id found: a1"))
        );

        definitions.pop();
        definitions.push(remainder(""));
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone()).is_err_and(|e| e
                == Error::invalid_definition("Group definitions must have a non-empty id."))
        );

        definitions.pop();
        definitions.push(remainder("rest"));
        assert!(DefinitionGraph::try_new(definitions.clone(), config.clone()).is_ok());
    }

    #[test]
    fn test_empty_forest() -> Result<(), Error> {
        let graph = DefinitionGraph::try_new(vec![], AggregationConfig::default())?;
        assert_eq!(graph.groups().count(), 0);
        assert_eq!(graph.top_level().count(), 0);
        Ok(())
    }
}
