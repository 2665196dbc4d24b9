// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Methods for validating the sibling lists of a [`DefinitionGraph`].

use std::collections::HashMap;

use crate::Error;

use super::{DefinitionGraphValidator, Level};

impl DefinitionGraphValidator<'_> {
    /// Validates that there is at most one remainder group in the level.
    pub(super) fn validate_remainders(&self, level: &Level) -> Result<(), Error> {
        let mut remainders = level
            .members
            .iter()
            .map(|&i| &self.dg.graph[i])
            .filter(|g| g.is_remainder());

        if let (Some(first), Some(second)) = (remainders.next(), remainders.next()) {
            return Err(Error::ambiguous_remainder(format!(
                "Groups {} and {} are both remainders in {}.",
                first.id(),
                second.id(),
                level.name
            )));
        }
        Ok(())
    }

    /// Validates that no code is summed more than once in the level, neither
    /// by two different groups nor twice by the same group.
    pub(super) fn validate_exclusive_codes(&self, level: &Level) -> Result<(), Error> {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for &index in &level.members {
            let group = &self.dg.graph[index];
            for code in group.kind().codes() {
                if let Some(owner) = owners.insert(code, group.id()) {
                    if owner == group.id() {
                        return Err(Error::duplicate_code_usage(format!(
                            "Code {} is listed more than once in group {}.",
                            code, owner
                        )));
                    }
                    return Err(Error::duplicate_code_usage(format!(
                        "Code {} is summed by both {} and {} in {}.",
                        code,
                        owner,
                        group.id(),
                        level.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::test_utils::{remainder, sum};
    use crate::{AggregationConfig, DefinitionGraph, Error};

    #[test]
    fn test_remainder_validation() {
        let config = AggregationConfig::default();
        let mut definitions = vec![
            sum("a", ["A"]),
            remainder("rest"),
            sum("b", ["B"]).with_children([sum("b1", ["B1"]), remainder("b-rest")]),
        ];
        assert!(DefinitionGraph::try_new(definitions.clone(), config.clone()).is_ok());

        definitions.push(remainder("rest-2"));
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone()).is_err_and(|e| e
                == Error::ambiguous_remainder(
                    "Groups rest and rest-2 are both remainders in the top level."
                ))
        );

        definitions.pop();
        definitions[2] = sum("b", ["B"]).with_children([
            remainder("b-rest"),
            sum("b1", ["B1"]),
            remainder("b-rest-2"),
        ]);
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone()).is_err_and(|e| e
                == Error::ambiguous_remainder(
                    "Groups b-rest and b-rest-2 are both remainders in the breakdown of b."
                ))
        );
    }

    #[test]
    fn test_exclusive_codes_validation() {
        let config = AggregationConfig::default();
        let mut definitions = vec![
            sum("a", ["A", "C"]),
            sum("b", ["B"]).with_children([sum("b1", ["A"]), sum("b2", ["C"])]),
        ];
        // The same code may be used again at a different level.
        assert!(DefinitionGraph::try_new(definitions.clone(), config.clone()).is_ok());

        definitions.push(sum("c", ["D", "C"]));
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone()).is_err_and(|e| e
                == Error::duplicate_code_usage(
                    "Code C is summed by both a and c in the top level."
                ))
        );

        definitions.pop();
        definitions[1] = sum("b", ["B"]).with_children([sum("b1", ["A", "B1", "A"])]);
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone()).is_err_and(|e| e
                == Error::duplicate_code_usage("Code A is listed more than once in group b1."))
        );

        definitions[1] = sum("b", ["B"]).with_children([sum("b1", ["X"]), sum("b2", ["X"])]);
        assert!(
            DefinitionGraph::try_new(definitions.clone(), config.clone()).is_err_and(|e| e
                == Error::duplicate_code_usage(
                    "Code X is summed by both b1 and b2 in the breakdown of b."
                ))
        );

        let config = AggregationConfig {
            allow_shared_codes: true,
            ..Default::default()
        };
        assert!(DefinitionGraph::try_new(definitions.clone(), config).is_ok());
    }
}
