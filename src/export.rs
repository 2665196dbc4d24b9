// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! CSV exports consumed by the chart templates.

use std::io::Write;

use serde::Serialize;

use crate::{Error, Wedge};

#[derive(Serialize)]
struct WedgeRecord<'a> {
    id: &'a str,
    value: f64,
    parent_id: Option<&'a str>,
    label: &'a str,
}

#[derive(Serialize)]
struct StringRecord<'a> {
    id: &'a str,
    value: &'a str,
}

/// Writes the visible wedges as `id,value,parent_id,label` records.
///
/// Wedges and their parents are identified by their qualified ids.  Wedges
/// without a label are skipped, and colors are not exported.  The header is
/// written even if no wedge is.
pub fn write_wedges_csv<'a>(
    wedges: impl IntoIterator<Item = &'a Wedge>,
    writer: impl Write,
) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut written = 0;
    let mut skipped = 0;
    for wedge in wedges {
        if !wedge.is_visible() {
            skipped += 1;
            continue;
        }
        wtr.serialize(WedgeRecord {
            id: wedge.qualified_id(),
            value: wedge.value(),
            parent_id: wedge.parent_qualified_id(),
            label: wedge.label(),
        })
        .map_err(|e| Error::export(format!("Can't write wedge {}: {e}", wedge.id())))?;
        written += 1;
    }
    if skipped > 0 {
        tracing::trace!("Skipped {} unlabeled wedges.", skipped);
    }
    if written == 0 {
        wtr.write_record(["id", "value", "parent_id", "label"])
            .map_err(|e| Error::export(format!("Can't write header: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| Error::export(format!("Can't flush wedges: {e}")))
}

/// Writes named text snippets as `id,value` records.
pub fn write_strings_csv<K, V>(
    strings: impl IntoIterator<Item = (K, V)>,
    writer: impl Write,
) -> Result<(), Error>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    let mut written = 0;
    for (id, value) in strings {
        wtr.serialize(StringRecord {
            id: id.as_ref(),
            value: value.as_ref(),
        })
        .map_err(|e| Error::export(format!("Can't write string {}: {e}", id.as_ref())))?;
        written += 1;
    }
    if written == 0 {
        wtr.write_record(["id", "value"])
            .map_err(|e| Error::export(format!("Can't write header: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| Error::export(format!("Can't flush strings: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aggregate, GroupDefinition, ValueTable};

    #[test]
    fn test_write_wedges() -> Result<(), Error> {
        let definitions = vec![
            GroupDefinition::sum("transport", "Doprava", "#a10014", ["T"]).with_children([
                GroupDefinition::sum("cars", "Auta", "#a10014e7", ["T.cars"]),
                GroupDefinition::remainder("transport-rest", "", "#ffffff00"),
            ]),
            GroupDefinition::remainder("other", "Jiné", "#f8c551"),
        ];
        let table = ValueTable::from([("TOTAL", 100.0), ("T", 20.0), ("T.cars", 12.5)]);
        let aggregation = aggregate(&table, &definitions, "TOTAL")?;

        let mut out = Vec::new();
        write_wedges_csv(aggregation.wedges(), &mut out)?;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,value,parent_id,label\n\
             transport,20.0,,Doprava\n\
             transport_cars,12.5,transport,Auta\n\
             other,80.0,,Jiné\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_nested_wedges() -> Result<(), Error> {
        let definitions = vec![GroupDefinition::sum("transport", "Doprava", "#a10014", ["T"])
            .with_children([GroupDefinition::sum("cars", "Auta", "#a10014e7", ["T.cars"])
                .with_children([
                    GroupDefinition::sum("diesel", "Diesel", "#a10014cf", ["T.cars.diesel"]),
                    GroupDefinition::remainder("petrol", "Benzín", "#a10014b7"),
                ])])];
        let table = ValueTable::from([
            ("TOTAL", 40.0),
            ("T", 20.0),
            ("T.cars", 12.0),
            ("T.cars.diesel", 5.0),
        ]);
        let aggregation = aggregate(&table, &definitions, "TOTAL")?;

        let mut out = Vec::new();
        write_wedges_csv(aggregation.wedges(), &mut out)?;
        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "id,value,parent_id,label\n\
             transport,20.0,,Doprava\n\
             transport_cars,12.0,transport,Auta\n\
             transport_cars_diesel,5.0,transport_cars,Diesel\n\
             transport_cars_petrol,7.0,transport_cars,Benzín\n"
        );

        // Every parent refers to an exported row.
        let ids = csv
            .lines()
            .skip(1)
            .filter_map(|l| l.split(',').next())
            .collect::<Vec<_>>();
        for line in csv.lines().skip(1) {
            let parent = line.split(',').nth(2).unwrap_or_default();
            assert!(parent.is_empty() || ids.contains(&parent), "{line}");
        }
        Ok(())
    }

    #[test]
    fn test_write_strings() -> Result<(), Error> {
        let mut out = Vec::new();
        write_strings_csv(
            [("total", "120,5"), ("lulucf-emissions", "\u{2212}3,2")],
            &mut out,
        )?;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,value\ntotal,\"120,5\"\nlulucf-emissions,\"\u{2212}3,2\"\n"
        );

        let mut out = Vec::new();
        write_strings_csv(Vec::<(String, String)>::new(), &mut out)?;
        assert_eq!(String::from_utf8(out).unwrap(), "id,value\n");
        Ok(())
    }
}
