// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Accompanying texts for the emission charts.
//!
//! Texts are rendered from templates registered per sector and, optionally,
//! per geographical area.  Rendering for an area without its own template
//! falls back to the sector's generic one.
//!
//! Two families of templates exist: [`SectorFigures`] templates describe one
//! year, [`EvolutionFigures`] templates describe the change between two
//! years.  Fixed paragraphs and per-sector tips live in the `texts`
//! functions re-exported here.

mod evolution;
mod summary;
mod texts;

#[cfg(test)]
mod test_utils;

pub use evolution::EvolutionFigures;
pub use summary::SectorFigures;
pub use texts::{
    flights_info, gases_info, lulucf_info, methodology_info, sectoral_tips,
    trade_and_flights_info,
};

use std::collections::HashMap;

use crate::geo::Geo;
use crate::sectors::Sector;
use crate::Error;

/// The key under which a narrative template is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NarrativeKey {
    pub sector: Sector,
    pub geo: Option<Geo>,
}

impl NarrativeKey {
    pub fn new(sector: Sector, geo: Option<Geo>) -> Self {
        Self { sector, geo }
    }
}

/// Figures that narrative templates are rendered from.
pub trait Figures {
    /// The sector the figures describe.
    fn sector(&self) -> Sector;
}

/// A function rendering the text for one sector from figures of type `F`.
pub type Template<F> = fn(&F, Option<Geo>) -> Result<String, Error>;

/// A registry of narrative templates.
pub struct Narratives<F> {
    templates: HashMap<NarrativeKey, Template<F>>,
}

impl<F> Default for Narratives<F> {
    fn default() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }
}

impl<F: Figures> Narratives<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template, replacing any template previously registered
    /// under the same key.
    pub fn register(&mut self, key: NarrativeKey, template: Template<F>) -> &mut Self {
        if self.templates.insert(key, template).is_some() {
            tracing::debug!("Replaced narrative template for {:?}.", key);
        }
        self
    }

    /// Returns the template for the given sector and area, falling back to
    /// the sector's generic template.
    pub fn template(&self, sector: Sector, geo: Option<Geo>) -> Result<Template<F>, Error> {
        geo.and_then(|g| self.templates.get(&NarrativeKey::new(sector, Some(g))))
            .or_else(|| self.templates.get(&NarrativeKey::new(sector, None)))
            .copied()
            .ok_or_else(|| {
                Error::missing_template(match geo {
                    Some(g) => format!("No narrative template for sector {sector} and geo {g}."),
                    None => format!("No narrative template for sector {sector}."),
                })
            })
    }

    /// Renders the text for the sector of `figures`.
    pub fn render(&self, figures: &F, geo: Option<Geo>) -> Result<String, Error> {
        let template = self.template(figures.sector(), geo)?;
        template(figures, geo)
    }
}
