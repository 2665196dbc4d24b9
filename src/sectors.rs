// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! This module defines the emission sectors and subsectors shown in the
//! emission pie charts, and the CRF codes they are built from.

use std::fmt::Display;

use crate::{Error, GroupDefinition, ValueTable};

/// The code of the total emissions, excluding LULUCF, including
/// international aviation.
pub const TOTAL_EMISSIONS_CODE: &str = "TOTX4_MEMONIA";

/// The codes `TOTAL_EMISSIONS_CODE` is rebuilt from since it stopped being
/// published: total emissions excluding LULUCF, and international aviation.
pub const TOTAL_EMISSIONS_COMPONENTS: [&str; 2] = ["TOTX4_MEMO", "CRF1D1A"];

/// The color used for groups that are computed but not drawn.
pub const INVISIBLE_COLOR: &str = "#ffffff00";

/// Returns a copy of the table with `TOTAL_EMISSIONS_CODE` rebuilt from its
/// components.
pub fn reconstruct_total(table: &ValueTable) -> Result<ValueTable, Error> {
    table.with_composite(TOTAL_EMISSIONS_CODE, TOTAL_EMISSIONS_COMPONENTS)
}

/// An emission sector, drawn as one wedge of the inner ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sector {
    Industry,
    Transport,
    ElectricityHeat,
    Buildings,
    Agriculture,
    Waste,
    Other,
}

impl Sector {
    pub const ALL: [Sector; 7] = [
        Sector::Industry,
        Sector::Transport,
        Sector::ElectricityHeat,
        Sector::Buildings,
        Sector::Agriculture,
        Sector::Waste,
        Sector::Other,
    ];

    /// Returns the group id of the sector.
    pub fn id(self) -> &'static str {
        match self {
            Sector::Industry => "industry",
            Sector::Transport => "transport",
            Sector::ElectricityHeat => "electricity-heat",
            Sector::Buildings => "buildings",
            Sector::Agriculture => "agriculture",
            Sector::Waste => "waste",
            Sector::Other => "other",
        }
    }

    /// Returns the CRF codes summed into the sector, or `None` for the sector
    /// that collects everything else.
    pub fn codes(self) -> Option<&'static [&'static str]> {
        match self {
            Sector::Industry => Some(&["CRF2", "CRF1A2", "CRF1A1B", "CRF1A1C", "CRF1A3E", "CRF1B"]),
            Sector::Transport => Some(&["CRF1A3A", "CRF1A3B", "CRF1A3C", "CRF1A3D", "CRF1D1A"]),
            Sector::ElectricityHeat => Some(&["CRF1A1A"]),
            Sector::Buildings => Some(&["CRF1A4A", "CRF1A4B"]),
            Sector::Agriculture => Some(&["CRF1A4C", "CRF3"]),
            Sector::Waste => Some(&["CRF5"]),
            Sector::Other => None,
        }
    }

    /// Returns the Czech label of the sector.
    pub fn label_cs(self) -> &'static str {
        match self {
            Sector::Industry => "Průmysl",
            Sector::Transport => "Doprava (včetně letecké)",
            Sector::ElectricityHeat => "Výroba elektřiny a tepla",
            Sector::Buildings => "Budovy",
            Sector::Agriculture => "Zemědělství",
            Sector::Waste => "Odpadové hospodářství",
            Sector::Other => "Jiné",
        }
    }

    /// Returns the base color of the sector.
    pub fn color(self) -> &'static str {
        match self {
            Sector::Industry => "#7363bd",
            Sector::Transport => "#a10014",
            Sector::ElectricityHeat => "#ff4245",
            Sector::Buildings => "#00007f",
            Sector::Agriculture => "#1ecfbd",
            Sector::Waste => "#029485",
            Sector::Other => "#f8c551",
        }
    }

    /// Returns the definition of the sector, without a breakdown.
    pub fn definition(self) -> GroupDefinition {
        match self.codes() {
            Some(codes) => GroupDefinition::sum(
                self.id(),
                self.label_cs(),
                self.color(),
                codes.iter().copied(),
            ),
            None => GroupDefinition::remainder(self.id(), self.label_cs(), self.color()),
        }
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A subsector, drawn as one wedge of the outer ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsector {
    Metal,
    Mineral,
    Fuels,
    Cars,
    TrucksBuses,
    Airplanes,
}

impl Subsector {
    pub fn id(self) -> &'static str {
        match self {
            Subsector::Metal => "metal",
            Subsector::Mineral => "mineral",
            Subsector::Fuels => "fuels",
            Subsector::Cars => "cars",
            Subsector::TrucksBuses => "trucks-buses",
            Subsector::Airplanes => "airplanes",
        }
    }

    /// Returns the sector the subsector belongs to.
    pub fn sector(self) -> Sector {
        match self {
            Subsector::Metal | Subsector::Mineral | Subsector::Fuels => Sector::Industry,
            Subsector::Cars | Subsector::TrucksBuses | Subsector::Airplanes => Sector::Transport,
        }
    }

    pub fn codes(self) -> &'static [&'static str] {
        match self {
            Subsector::Metal => &["CRF1A2A", "CRF1A2B", "CRF2C"],
            Subsector::Mineral => &["CRF1A2F", "CRF2A"],
            Subsector::Fuels => &["CRF1A1C", "CRF1A1B", "CRF1A3E", "CRF1B"],
            Subsector::Cars => &["CRF1A3B1"],
            Subsector::TrucksBuses => &["CRF1A3B2", "CRF1A3B3"],
            Subsector::Airplanes => &["CRF1D1A", "CRF1A3A"],
        }
    }

    pub fn label_cs(self) -> &'static str {
        match self {
            Subsector::Metal => "Ocel a jiné kovy",
            Subsector::Mineral => "Cement a jiné minerály",
            Subsector::Fuels => "Těžba a zpracování fosilních paliv",
            Subsector::Cars => "Osobní automobilová doprava",
            Subsector::TrucksBuses => "Nákladní a autobusová doprava",
            Subsector::Airplanes => "Letecká doprava",
        }
    }

    /// Returns the definition of the subsector, colored with the next shade
    /// of its sector's color.
    ///
    /// Returns an error if `shades` belongs to a different sector, or has run
    /// out of shades.
    pub fn definition(self, shades: &mut ShadeAllocator) -> Result<GroupDefinition, Error> {
        if shades.sector() != self.sector() {
            return Err(Error::invalid_definition(format!(
                "Can't color subsector {} with shades of sector {}.",
                self.id(),
                shades.sector()
            )));
        }
        Ok(GroupDefinition::sum(
            self.id(),
            self.label_cs(),
            shades.next_shade()?,
            self.codes().iter().copied(),
        ))
    }
}

/// Derives successive shades of a sector's base color, by lowering the alpha
/// channel by 24 for each shade.
///
/// One allocator should be used per sector and per rendering pass.
#[derive(Debug)]
pub struct ShadeAllocator {
    sector: Sector,
    allocated: u8,
}

impl ShadeAllocator {
    /// The number of shades that can be derived from one base color.
    pub const MAX_SHADES: u8 = 10;

    pub fn new(sector: Sector) -> Self {
        Self {
            sector,
            allocated: 0,
        }
    }

    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// Returns the next shade, as an `#rrggbbaa` color.
    pub fn next_shade(&mut self) -> Result<String, Error> {
        if self.allocated >= Self::MAX_SHADES {
            return Err(Error::invalid_definition(format!(
                "Only up to {} subsectors are supported for sector {}.",
                Self::MAX_SHADES,
                self.sector
            )));
        }
        self.allocated += 1;
        let alpha = 255 - 24 * self.allocated;
        Ok(format!("{}{:02x}", self.sector.color(), alpha))
    }
}

/// Returns a remainder group that is computed but neither drawn nor
/// exported.
pub fn invisible_remainder(id: impl Into<String>) -> GroupDefinition {
    GroupDefinition::remainder(id, "", INVISIBLE_COLOR)
}

/// Returns the definition of the standard two-ring emission pie chart.
///
/// Industry and transport are broken down into their subsectors; whatever
/// the subsectors don't cover is kept in an invisible remainder.
pub fn standard_definitions() -> Result<Vec<GroupDefinition>, Error> {
    let mut definitions = Vec::with_capacity(Sector::ALL.len());
    for sector in Sector::ALL {
        let subsectors: &[Subsector] = match sector {
            Sector::Industry => &[Subsector::Metal, Subsector::Mineral, Subsector::Fuels],
            Sector::Transport => &[Subsector::Cars, Subsector::TrucksBuses, Subsector::Airplanes],
            _ => &[],
        };

        let mut definition = sector.definition();
        if !subsectors.is_empty() {
            let mut shades = ShadeAllocator::new(sector);
            let mut children = subsectors
                .iter()
                .map(|s| s.definition(&mut shades))
                .collect::<Result<Vec<_>, _>>()?;
            children.push(invisible_remainder(format!("{}-rest", sector.id())));
            definition = definition.with_children(children);
        }
        definitions.push(definition);
    }
    Ok(definitions)
}
