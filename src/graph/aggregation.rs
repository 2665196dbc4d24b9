// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Methods for aggregating a [`ValueTable`] over the groups of a
//! [`DefinitionGraph`].
//!
//! Every sibling list is aggregated in two passes: first all the groups that
//! sum explicit codes, then the remainder group, if there is one.  The
//! remainder is the level's reference value minus the sum of all explicit
//! siblings, so it can only be computed once all of them are known.
//!
//! Top-level groups use the total reference code as their reference value.
//! Nested groups use the value of their parent group, which is recorded in
//! the value table under the parent's id before the breakdown is aggregated.
//! This also allows nested groups to sum the ids of groups from outer levels
//! as if they were codes.

mod expr;
mod wedges;

#[cfg(test)]
mod properties;

pub use wedges::Wedge;

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::NodeIndex;

use crate::{
    AggregationConfig, DefinitionGraph, Error, GroupDefinition, MissingCodePolicy, ValueTable,
};

use expr::{Expr, Resolver};

/// A mapping from group ids to the fraction of their level's reference value
/// that they represent.
pub type FractionTable = BTreeMap<String, f64>;

/// A recoverable problem found while aggregating.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A code was missing from the value table and was counted as zero.
    MissingCodeSubstituted { group_id: String, code: String },
    /// A group id matched a code of the value table, and the group's value
    /// replaced a different value stored under that code.
    CodeOverwritten {
        group_id: String,
        previous: f64,
        value: f64,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCodeSubstituted { group_id, code } => write!(
                f,
                "Code {code} used by group {group_id} is missing, filled with 0.0."
            ),
            Self::CodeOverwritten {
                group_id,
                previous,
                value,
            } => write!(
                f,
                "Group {group_id} replaced the table value {previous} with {value}."
            ),
        }
    }
}

/// The result of aggregating a [`ValueTable`] over a [`DefinitionGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregation {
    values: ValueTable,
    fractions: FractionTable,
    diagnostics: Vec<Diagnostic>,
    formulas: BTreeMap<String, String>,
    wedges: Vec<Wedge>,
    total: f64,
}

impl Aggregation {
    /// Returns the augmented value table: the input entries plus one entry
    /// per group id.
    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Returns the value of the given group or code.
    pub fn value(&self, id: &str) -> Result<f64, Error> {
        self.values.get(id)
    }

    /// Returns the fraction of the level's reference value for every group
    /// whose reference value is not zero.
    pub fn fractions(&self) -> &FractionTable {
        &self.fractions
    }

    pub fn fraction(&self, id: &str) -> Option<f64> {
        self.fractions.get(id).copied()
    }

    /// Returns the problems that were recovered from, in the order they were
    /// found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the expression the value of the given group was computed
    /// from.
    ///
    /// Codes are rendered as `#CODE` and sibling groups as `{id}`.
    pub fn formula(&self, id: &str) -> Option<&str> {
        self.formulas.get(id).map(String::as_str)
    }

    /// Returns the value of the total reference code.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Returns all the wedges, parents before their children, siblings in
    /// declaration order.
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    /// Returns the wedges at the given nesting depth, in declaration order.
    ///
    /// Depth `0` is the inner ring of a pie chart, depth `1` the ring around
    /// it.
    pub fn ring(&self, depth: usize) -> impl Iterator<Item = &Wedge> {
        self.wedges.iter().filter(move |w| w.depth() == depth)
    }

    /// Returns the wedge for the given group id.
    pub fn wedge(&self, id: &str) -> Option<&Wedge> {
        self.wedges.iter().find(|w| w.id() == id)
    }

    /// Splits the aggregation into the augmented value table and the
    /// fraction table.
    pub fn into_parts(self) -> (ValueTable, FractionTable) {
        (self.values, self.fractions)
    }
}

/// Aggregates `value_table` over the given definitions, with the default
/// configuration.
pub fn aggregate(
    value_table: &ValueTable,
    definitions: &[GroupDefinition],
    total_reference_code: &str,
) -> Result<Aggregation, Error> {
    aggregate_with_config(
        value_table,
        definitions,
        total_reference_code,
        AggregationConfig::default(),
    )
}

/// Aggregates `value_table` over the given definitions.
pub fn aggregate_with_config(
    value_table: &ValueTable,
    definitions: &[GroupDefinition],
    total_reference_code: &str,
    config: AggregationConfig,
) -> Result<Aggregation, Error> {
    DefinitionGraph::try_new(definitions.iter().cloned(), config)?
        .aggregate(value_table, total_reference_code)
}

/// `ValueTable` aggregation.
impl DefinitionGraph {
    /// Computes the value of every group in the graph.
    ///
    /// The given table is not modified; the returned [`Aggregation`] holds a
    /// copy of it, augmented with the group values.
    pub fn aggregate(
        &self,
        value_table: &ValueTable,
        total_reference_code: &str,
    ) -> Result<Aggregation, Error> {
        let total = value_table.value(total_reference_code).ok_or_else(|| {
            Error::missing_reference_code(format!(
                "Reference code {total_reference_code} not found in the value table."
            ))
        })?;

        let mut pass = AggregationPass {
            dg: self,
            values: value_table.clone(),
            fractions: FractionTable::new(),
            diagnostics: Vec::new(),
            formulas: BTreeMap::new(),
        };
        pass.aggregate_level(&self.top_level, total_reference_code)?;

        let wedges = self.wedges(&pass.values, &pass.fractions)?;

        Ok(Aggregation {
            values: pass.values,
            fractions: pass.fractions,
            diagnostics: pass.diagnostics,
            formulas: pass.formulas,
            wedges,
            total,
        })
    }
}

/// The state of one call to [`DefinitionGraph::aggregate`].
struct AggregationPass<'a> {
    dg: &'a DefinitionGraph,
    values: ValueTable,
    fractions: FractionTable,
    diagnostics: Vec<Diagnostic>,
    formulas: BTreeMap<String, String>,
}

impl AggregationPass<'_> {
    fn aggregate_level(&mut self, level: &[NodeIndex], reference_code: &str) -> Result<(), Error> {
        let dg = self.dg;
        let reference = self.values.value(reference_code).ok_or_else(|| {
            Error::missing_reference_code(format!(
                "Reference code {reference_code} not found in the value table."
            ))
        })?;

        let mut explicit = Vec::new();
        let mut remainder = None;
        for &index in level {
            let group = &dg.graph[index];
            if group.is_remainder() {
                remainder = Some(index);
            } else {
                let expr = Expr::sum(group.kind().codes().iter().map(Expr::code));
                explicit.push((index, expr));
            }
        }

        // First pass: explicit sums, all read from the table as it was before
        // this level.
        let mut computed = HashMap::new();
        for (index, expr) in &explicit {
            let id = dg.graph[*index].id();
            let value = expr.evaluate(&mut LevelResolver {
                values: &self.values,
                siblings: &computed,
                group_id: id,
                policy: dg.config.on_missing_code,
                diagnostics: &mut self.diagnostics,
            })?;
            computed.insert(id.to_string(), value);
        }

        // Second pass: the remainder, from the fully accumulated explicit
        // siblings.
        let mut exprs = explicit.into_iter().collect::<HashMap<_, _>>();
        if let Some(index) = remainder {
            let id = dg.graph[index].id();
            let siblings = level
                .iter()
                .filter(|&&i| i != index)
                .map(|&i| Expr::group(dg.graph[i].id()));
            let expr = match Expr::sum(siblings) {
                Expr::Number { .. } => Expr::code(reference_code),
                sum => Expr::code(reference_code) - sum,
            };
            let value = expr.evaluate(&mut LevelResolver {
                values: &self.values,
                siblings: &computed,
                group_id: id,
                policy: dg.config.on_missing_code,
                diagnostics: &mut self.diagnostics,
            })?;
            computed.insert(id.to_string(), value);
            exprs.insert(index, expr);
        }

        for &index in level {
            let id = dg.graph[index].id();
            let value = computed
                .get(id)
                .copied()
                .ok_or_else(|| Error::internal(format!("Group {id} was not computed.")))?;
            let expr = exprs
                .get(&index)
                .ok_or_else(|| Error::internal(format!("Group {id} has no formula.")))?;

            tracing::debug!("Group {} = {} = {}", id, expr, value);

            if reference != 0.0 {
                self.fractions.insert(id.to_string(), value / reference);
            }
            self.formulas.insert(id.to_string(), expr.to_string());
            if let Some(previous) = self.values.insert(id, value) {
                if previous != value {
                    let diagnostic = Diagnostic::CodeOverwritten {
                        group_id: id.to_string(),
                        previous,
                        value,
                    };
                    tracing::debug!("{}", diagnostic);
                    self.diagnostics.push(diagnostic);
                }
            }
        }

        for &index in level {
            let children = dg.child_indices(index);
            if !children.is_empty() {
                self.aggregate_level(&children, dg.graph[index].id())?;
            }
        }

        Ok(())
    }
}

/// Resolves the operands of the expressions of one sibling list.
struct LevelResolver<'a> {
    values: &'a ValueTable,
    siblings: &'a HashMap<String, f64>,
    group_id: &'a str,
    policy: MissingCodePolicy,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl Resolver for LevelResolver<'_> {
    fn code(&mut self, code: &str) -> Result<f64, Error> {
        if let Some(value) = self.values.value(code) {
            return Ok(value);
        }
        match self.policy {
            MissingCodePolicy::Fail => Err(Error::missing_code(format!(
                "Code {} used by group {} not found in the value table.",
                code, self.group_id
            ))),
            MissingCodePolicy::ZeroWithWarning => {
                let diagnostic = Diagnostic::MissingCodeSubstituted {
                    group_id: self.group_id.to_string(),
                    code: code.to_string(),
                };
                tracing::warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
                Ok(0.0)
            }
        }
    }

    fn group(&mut self, id: &str) -> Result<f64, Error> {
        self.siblings.get(id).copied().ok_or_else(|| {
            Error::internal(format!(
                "Sibling {} of group {} has not been computed yet.",
                id, self.group_id
            ))
        })
    }
}
