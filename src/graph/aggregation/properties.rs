// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Randomized checks of the aggregation invariants, over forests of up to two
//! levels with random codes, signs, and remainder positions.

use proptest::prelude::*;

use crate::{aggregate, Aggregation, GroupDefinition, ValueTable};

#[derive(Clone, Debug)]
struct LevelShape {
    groups: Vec<GroupShape>,
    /// Where the remainder is declared, modulo the number of positions.
    remainder: Option<usize>,
}

#[derive(Clone, Debug)]
struct GroupShape {
    /// One table entry per code; empty for groups that sum no codes.
    values: Vec<f64>,
    children: Option<LevelShape>,
}

fn arb_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0..50.0f64, 0..4)
}

fn arb_leaf_level() -> impl Strategy<Value = LevelShape> {
    (
        prop::collection::vec(
            arb_values().prop_map(|values| GroupShape {
                values,
                children: None,
            }),
            1..4,
        ),
        prop::option::of(any::<usize>()),
    )
        .prop_map(|(groups, remainder)| LevelShape { groups, remainder })
}

fn arb_top_level() -> impl Strategy<Value = LevelShape> {
    (
        prop::collection::vec(
            (arb_values(), prop::option::of(arb_leaf_level()))
                .prop_map(|(values, children)| GroupShape { values, children }),
            1..5,
        ),
        prop::option::of(any::<usize>()),
    )
        .prop_map(|(groups, remainder)| LevelShape { groups, remainder })
}

/// The sibling list of one level, as declared.
#[derive(Debug)]
struct Level {
    reference: String,
    explicit: Vec<(String, Vec<String>)>,
    remainder: Option<String>,
}

/// Definitions and a table built from random shapes, with globally unique
/// group ids and codes.
#[derive(Debug, Default)]
struct Forest {
    definitions: Vec<GroupDefinition>,
    table: ValueTable,
    levels: Vec<Level>,
    declared: Vec<String>,
    codes: usize,
}

impl Forest {
    fn new(shape: &LevelShape, total: f64) -> Self {
        let mut forest = Forest::default();
        forest.table.insert("TOTAL", total);
        forest.definitions = forest.level(shape, "TOTAL", "g");
        forest
    }

    fn level(
        &mut self,
        shape: &LevelShape,
        reference: &str,
        prefix: &str,
    ) -> Vec<GroupDefinition> {
        let remainder_at = shape.remainder.map(|i| i % (shape.groups.len() + 1));
        let remainder_id = format!("{prefix}-rest");
        let mut level = Level {
            reference: reference.to_string(),
            explicit: Vec::new(),
            remainder: remainder_at.map(|_| remainder_id.clone()),
        };

        let mut definitions = Vec::new();
        for (position, group) in shape.groups.iter().enumerate() {
            if remainder_at == Some(position) {
                self.declared.push(remainder_id.clone());
                definitions.push(GroupDefinition::remainder(&remainder_id, "rest", "#ffffff"));
            }

            let id = format!("{prefix}{position}");
            let mut codes = Vec::new();
            for value in &group.values {
                let code = format!("C{}", self.codes);
                self.codes += 1;
                self.table.insert(code.clone(), *value);
                codes.push(code);
            }
            self.declared.push(id.clone());
            let mut definition = GroupDefinition::sum(&id, &id, "#000000", codes.clone());
            if let Some(children) = &group.children {
                let breakdown = self.level(children, &id, &format!("{id}."));
                definition = definition.with_children(breakdown);
            }
            level.explicit.push((id, codes));
            definitions.push(definition);
        }
        if remainder_at == Some(shape.groups.len()) {
            self.declared.push(remainder_id.clone());
            definitions.push(GroupDefinition::remainder(&remainder_id, "rest", "#ffffff"));
        }

        self.levels.push(level);
        definitions
    }
}

fn close(actual: f64, expected: f64, scale: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * scale.max(1.0)
}

fn check_levels(forest: &Forest, aggregation: &Aggregation) -> Result<(), TestCaseError> {
    for level in &forest.levels {
        let reference = aggregation.values().get(&level.reference)?;
        let mut explicit_sum = 0.0;
        let mut scale = reference.abs();

        for (id, codes) in &level.explicit {
            let value = aggregation.value(id)?;
            let mut expected = 0.0;
            for code in codes {
                expected += forest.table.get(code)?;
            }
            prop_assert!(
                close(value, expected, expected.abs()),
                "{id} = {value}, expected {expected}"
            );
            explicit_sum += value;
            scale += value.abs();
        }

        if let Some(id) = &level.remainder {
            let remainder = aggregation.value(id)?;
            prop_assert!(
                close(remainder + explicit_sum, reference, scale),
                "{id} = {remainder} does not complete {} = {reference}",
                level.reference
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn remainders_complete_their_reference(
        shape in arb_top_level(),
        total in -100.0..100.0f64,
    ) {
        let forest = Forest::new(&shape, total);
        let aggregation = aggregate(&forest.table, &forest.definitions, "TOTAL")?;
        prop_assert!(aggregation.diagnostics().is_empty());
        check_levels(&forest, &aggregation)?;
    }

    #[test]
    fn aggregation_is_idempotent(
        shape in arb_top_level(),
        total in -100.0..100.0f64,
    ) {
        let forest = Forest::new(&shape, total);
        let first = aggregate(&forest.table, &forest.definitions, "TOTAL")?;
        let second = aggregate(first.values(), &forest.definitions, "TOTAL")?;
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn wedges_keep_declaration_order(
        shape in arb_top_level(),
        total in -100.0..100.0f64,
    ) {
        let forest = Forest::new(&shape, total);
        let aggregation = aggregate(&forest.table, &forest.definitions, "TOTAL")?;
        let ids = aggregation.wedges().iter().map(|w| w.id()).collect::<Vec<_>>();
        prop_assert_eq!(ids, forest.declared.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

#[test]
fn test_negative_remainder_and_empty_codes() -> Result<(), crate::Error> {
    let shape = LevelShape {
        groups: vec![
            GroupShape {
                values: vec![30.0, 45.5],
                children: Some(LevelShape {
                    groups: vec![GroupShape {
                        values: vec![],
                        children: None,
                    }],
                    remainder: Some(3),
                }),
            },
            GroupShape {
                values: vec![],
                children: None,
            },
        ],
        remainder: Some(0),
    };
    let forest = Forest::new(&shape, 50.0);
    assert_eq!(forest.declared, ["g-rest", "g0", "g0.0", "g0.-rest", "g1"]);

    let aggregation = aggregate(&forest.table, &forest.definitions, "TOTAL")?;
    assert_eq!(aggregation.value("g0")?, 75.5);
    assert_eq!(aggregation.value("g1")?, 0.0);
    assert_eq!(aggregation.value("g-rest")?, -25.5);
    assert_eq!(aggregation.value("g0.0")?, 0.0);
    assert_eq!(aggregation.value("g0.-rest")?, 75.5);
    assert!(check_levels(&forest, &aggregation).is_ok());
    Ok(())
}
