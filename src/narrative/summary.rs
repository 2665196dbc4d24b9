// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Texts describing the emissions of one sector in one year.

use super::texts::{flights_info, sectoral_tips};
use super::{Figures, NarrativeKey, Narratives};
use crate::format::czech_float;
use crate::geo::Geo;
use crate::sectors::Sector;
use crate::{Aggregation, Error};

/// The figures of one sector, read from an [`Aggregation`] over a CRF
/// inventory.
///
/// Group values and raw CRF codes are both looked up in the aggregation's
/// augmented value table.
#[derive(Clone, Copy, Debug)]
pub struct SectorFigures<'a> {
    sector: Sector,
    aggregation: &'a Aggregation,
    population: u64,
}

impl<'a> SectorFigures<'a> {
    /// Returns an error if the population or the aggregated total is zero.
    pub fn from_aggregation(
        aggregation: &'a Aggregation,
        sector: Sector,
        population: u64,
    ) -> Result<Self, Error> {
        if population == 0 {
            return Err(Error::invalid_figures(format!(
                "Population must not be zero for sector {sector}."
            )));
        }
        if aggregation.total() == 0.0 {
            return Err(Error::invalid_figures(format!(
                "Total emissions must not be zero for sector {sector}."
            )));
        }
        Ok(Self {
            sector,
            aggregation,
            population,
        })
    }

    /// Returns the value of a group or a CRF code, in Mt CO2eq.
    pub fn value(&self, id: &str) -> Result<f64, Error> {
        self.aggregation.value(id)
    }

    /// Returns the share of total emissions, in percent.
    pub fn share_percent(&self, id: &str) -> Result<f64, Error> {
        Ok(self.value(id)? / self.aggregation.total() * 100.0)
    }

    /// Returns the emissions per inhabitant, in tonnes.
    pub fn per_person(&self, id: &str) -> Result<f64, Error> {
        Ok(self.value(id)? * 1_000_000.0 / self.population as f64)
    }

    fn total_str(&self, id: &str) -> Result<String, Error> {
        Ok(czech_float(self.value(id)?, 2))
    }

    fn percent_str(&self, id: &str) -> Result<String, Error> {
        Ok(czech_float(self.share_percent(id)?, 1))
    }

    fn per_person_str(&self, id: &str) -> Result<String, Error> {
        Ok(czech_float(self.per_person(id)?, 2))
    }
}

impl Figures for SectorFigures<'_> {
    fn sector(&self) -> Sector {
        self.sector
    }
}

impl<'a> Narratives<SectorFigures<'a>> {
    /// Returns the Czech summaries of all sectors but [`Sector::Other`].
    ///
    /// The electricity and heat summary is only available for Czechia,
    /// Slovakia and the EU.
    pub fn czech_summaries() -> Self {
        let mut narratives = Self::new();
        narratives
            .register(NarrativeKey::new(Sector::Industry, None), industry)
            .register(NarrativeKey::new(Sector::Transport, None), transport)
            .register(NarrativeKey::new(Sector::ElectricityHeat, Some(Geo::CZ)), electricity_cz)
            .register(NarrativeKey::new(Sector::ElectricityHeat, Some(Geo::SK)), electricity_sk)
            .register(
                NarrativeKey::new(Sector::ElectricityHeat, Some(Geo::EU27)),
                electricity_eu,
            )
            .register(NarrativeKey::new(Sector::Buildings, None), buildings)
            .register(NarrativeKey::new(Sector::Agriculture, None), agriculture)
            .register(NarrativeKey::new(Sector::Waste, None), waste);
        narratives
    }
}

fn industry(f: &SectorFigures, _geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "__Průmysl:__ {} mil. tun CO<sub>2</sub> ({} % celkových emisí, {} t CO<sub>2</sub>eq na obyvatele ročně). {}",
        f.total_str("industry")?,
        f.percent_str("industry")?,
        f.per_person_str("industry")?,
        sectoral_tips(Sector::Industry, None)?,
    ))
}

fn transport(f: &SectorFigures, geo: Option<Geo>) -> Result<String, Error> {
    let trains = f.value("CRF1A3C")?;
    let trains_total = czech_float(trains, 2);
    let trains_percent = czech_float(trains / f.aggregation.total() * 100.0, 1);
    let airplanes_per_person_kg = czech_float(
        f.value("airplanes")? * 1_000_000.0 * 1000.0 / f.population as f64,
        1,
    );
    Ok(format!(
        "__Doprava:__ {} mil. tun CO<sub>2</sub> ({} % celkových emisí, {} t CO<sub>2</sub>eq na obyvatele ročně). Osobní automobilová doprava vyprodukuje {} mil. tun CO<sub>2</sub> ({} %) ročně, zatímco nákladní a autobusová doprava je zodpovědná za {} mil. tun CO<sub>2</sub> ({} %). Vlaková doprava je v grafu započtena, ale je příliš malá na to, aby se zobrazila ({trains_total} mil. tun CO<sub>2</sub>eq, což je {trains_percent} % celkových ročních emisí). Emise z letecké dopravy jsou {} mil. tun tun CO<sub>2</sub> ({} %, {airplanes_per_person_kg} kg na obyvatele ročně) a odpovídá emisím vyprodukovaným {}. {}",
        f.total_str("transport")?,
        f.percent_str("transport")?,
        f.per_person_str("transport")?,
        f.total_str("cars")?,
        f.percent_str("cars")?,
        f.total_str("trucks-buses")?,
        f.percent_str("trucks-buses")?,
        f.total_str("airplanes")?,
        f.percent_str("airplanes")?,
        flights_info(geo)?,
        sectoral_tips(Sector::Transport, None)?,
    ))
}

/// Power plants' emissions are what remains of the sector after combined
/// heat and power plants.
fn power_plants(f: &SectorFigures) -> Result<(String, String), Error> {
    let power_plants = f.value("electricity-heat")? - f.value("CHP")?;
    Ok((
        czech_float(power_plants, 2),
        czech_float(power_plants / f.aggregation.total() * 100.0, 2),
    ))
}

fn electricity_cz(f: &SectorFigures, geo: Option<Geo>) -> Result<String, Error> {
    let (total, percent) = power_plants(f)?;
    let details = format!(
        "Emise v energetice pochází především ze spalování hnědého uhlí a zemního plynu v elektrárnách ({total} milionů tun, resp. {percent} % celkových ročních emisí) a dále z tepláren ({} mil. tun, či {} % celkových emisí ročně). Největším jednotlivým emitentem CO<sub>2</sub> jsou elektrárny v Počeradech (pět hnědouhelných bloků a jeden na zemní plyn), které ročně vyprodukují {} mil. tun CO<sub>2</sub>, což je {} % celkových emisí České republiky. Pět největších českých fosilních elektráren, Počerady, Ledvice, Prunéřov, Tušimice a Chvaletice, vyprodukují ročně více emisí CO<sub>2</sub> než veškerá silniční doprava.",
        f.total_str("CHP")?,
        f.percent_str("CHP")?,
        f.total_str("pocerady")?,
        f.percent_str("pocerady")?,
    );
    electricity(f, geo, &details)
}

fn electricity_sk(f: &SectorFigures, geo: Option<Geo>) -> Result<String, Error> {
    let (total, percent) = power_plants(f)?;
    let details = format!(
        "Tyto emise pochází především z tepláren ({} mil. tun, či {} % celkových emisí ročně) a dále z tepelných elektráren ({total} milionů tun, resp. {percent} % celkových ročních emisí).",
        f.total_str("CHP")?,
        f.percent_str("CHP")?,
    );
    electricity(f, geo, &details)
}

fn electricity_eu(f: &SectorFigures, geo: Option<Geo>) -> Result<String, Error> {
    electricity(f, geo, "")
}

fn electricity(f: &SectorFigures, _geo: Option<Geo>, details: &str) -> Result<String, Error> {
    Ok(format!(
        "__Výroba elektřiny a tepla:__ {} milionů tun CO<sub>2</sub> ({} % celkových emisí, {} t CO<sub>2</sub>eq na obyvatele ročně). {details} {}",
        f.total_str("electricity-heat")?,
        f.percent_str("electricity-heat")?,
        f.per_person_str("electricity-heat")?,
        sectoral_tips(Sector::ElectricityHeat, None)?,
    ))
}

fn buildings(f: &SectorFigures, _geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "__Budovy:__ {} mil. tun CO<sub>2</sub> ({} % celkových emisí, tedy {} t CO<sub>2</sub>eq na obyvatele ročně). {}",
        f.total_str("buildings")?,
        f.percent_str("buildings")?,
        f.per_person_str("buildings")?,
        sectoral_tips(Sector::Buildings, None)?,
    ))
}

fn agriculture(f: &SectorFigures, _geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "__Zemědělství:__ {} mil. tun CO<sub>2</sub>eq ({} % celkových emisí, {} t CO<sub>2</sub>eq na obyvatele ročně). Emise v zemědělství pochází především z chovu hospodářských zvířat ({} mil. tun) v podobě emisí metanu a také z obdělávání půdy a s tím spojenými emisemi N<sub>2</sub>O ({} mil. tun CO<sub>2</sub>eq). Také sem patří spalování pohonných hmot v zemědělství a lesnictví. {}",
        f.total_str("agriculture")?,
        f.percent_str("agriculture")?,
        f.per_person_str("agriculture")?,
        f.total_str("CRF31")?,
        f.total_str("CRF3D")?,
        sectoral_tips(Sector::Agriculture, None)?,
    ))
}

fn waste(f: &SectorFigures, geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "__Odpadové hospodářství:__ {} mil. tun CO<sub>2</sub>eq ročně ({} % celkových emisí, {} t CO<sub>2</sub>eq na obyvatele ročně). {}",
        f.total_str("waste")?,
        f.percent_str("waste")?,
        f.per_person_str("waste")?,
        sectoral_tips(Sector::Waste, geo)?,
    ))
}
