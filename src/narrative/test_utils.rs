// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Test-only fixtures for the narrative templates.

use crate::{aggregate, Aggregation, Error, GroupDefinition, ValueTable};

/// The population the fixtures are rendered for.
pub(super) const POPULATION: u64 = 10_000_000;

fn definitions() -> Vec<GroupDefinition> {
    let group = |id: &str, code: &str| GroupDefinition::sum(id, id, "#000000", [code]);
    vec![
        group("industry", "I"),
        group("transport", "T").with_children([
            group("cars", "T.cars"),
            group("trucks-buses", "T.trucks"),
            group("airplanes", "T.air"),
            GroupDefinition::remainder("transport-rest", "", "#ffffff00"),
        ]),
        group("electricity-heat", "E")
            .with_children([group("CHP", "E.chp"), group("pocerady", "E.poc")]),
        group("buildings", "B"),
        group("agriculture", "A"),
        group("waste", "W"),
        GroupDefinition::remainder("other", "other", "#f8c551"),
    ]
}

/// An aggregation with round figures, totalling 100 Mt:
///
/// | group            | Mt | breakdown                              |
/// |------------------|----|----------------------------------------|
/// | industry         | 20 |                                        |
/// | transport        | 20 | cars 10, trucks-buses 6, airplanes 2   |
/// | electricity-heat | 40 | CHP 10, pocerady 5                     |
/// | buildings        |  8 |                                        |
/// | agriculture      |  6 |                                        |
/// | waste            |  4 |                                        |
/// | other            |  2 |                                        |
pub(super) fn recent() -> Result<Aggregation, Error> {
    let table = ValueTable::from([
        ("TOTAL", 100.0),
        ("I", 20.0),
        ("T", 20.0),
        ("T.cars", 10.0),
        ("T.trucks", 6.0),
        ("T.air", 2.0),
        ("E", 40.0),
        ("E.chp", 10.0),
        ("E.poc", 5.0),
        ("B", 8.0),
        ("A", 6.0),
        ("W", 4.0),
        ("CRF1A3C", 0.5),
        ("CRF31", 3.25),
        ("CRF3D", 1.5),
        ("CRF1A2A", 4.0),
        ("CRF2", 15.0),
        ("CRF2A1", 6.0),
        ("CRF2B1", 3.0),
        ("CRF2B2", 1.0),
        ("CRF2C1", 7.0),
        ("CRF2C3", 1.0),
        ("CRF2F", 2.5),
    ]);
    aggregate(&table, &definitions(), "TOTAL")
}

/// The same breakdown for an earlier year, totalling 200 Mt.
pub(super) fn baseline() -> Result<Aggregation, Error> {
    let table = ValueTable::from([
        ("TOTAL", 200.0),
        ("I", 40.0),
        ("T", 16.0),
        ("T.cars", 8.0),
        ("T.trucks", 5.0),
        ("T.air", 1.0),
        ("E", 80.0),
        ("E.chp", 20.0),
        ("E.poc", 10.0),
        ("B", 16.0),
        ("A", 12.0),
        ("W", 2.0),
        ("CRF1A2A", 10.0),
        ("CRF2", 20.0),
        ("CRF2A1", 8.0),
        ("CRF2B1", 4.0),
        ("CRF2B2", 5.0),
        ("CRF2C1", 10.0),
        ("CRF2C3", 2.0),
    ]);
    aggregate(&table, &definitions(), "TOTAL")
}
