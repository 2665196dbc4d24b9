// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Texts describing how the emissions of one sector changed between two
//! years.

use super::texts::sectoral_tips;
use super::{Figures, NarrativeKey, Narratives};
use crate::format::czech_float_for_html;
use crate::geo::Geo;
use crate::sectors::Sector;
use crate::{Aggregation, Error};

/// The figures of one sector in two years, read from one [`Aggregation`]
/// per year.
#[derive(Clone, Copy, Debug)]
pub struct EvolutionFigures<'a> {
    sector: Sector,
    year_from: i32,
    year_to: i32,
    from: &'a Aggregation,
    to: &'a Aggregation,
}

impl<'a> EvolutionFigures<'a> {
    /// Returns an error if the sector is missing from either aggregation, or
    /// if its emissions in `year_from` are zero.
    pub fn new(
        sector: Sector,
        (year_from, from): (i32, &'a Aggregation),
        (year_to, to): (i32, &'a Aggregation),
    ) -> Result<Self, Error> {
        to.value(sector.id())?;
        if from.value(sector.id())? == 0.0 {
            return Err(Error::invalid_figures(format!(
                "Emissions of sector {sector} are zero in {year_from}."
            )));
        }
        Ok(Self {
            sector,
            year_from,
            year_to,
            from,
            to,
        })
    }

    pub fn year_from(&self) -> i32 {
        self.year_from
    }

    pub fn year_to(&self) -> i32 {
        self.year_to
    }

    /// Returns the absolute change of the sector's emissions, in percent of
    /// the emissions in `year_from`.
    pub fn change_percent(&self) -> Result<f64, Error> {
        let id = self.sector.id();
        Ok(((1.0 - self.to.value(id)? / self.from.value(id)?) * 100.0).abs())
    }

    /// Returns by how many percent a CRF code decreased between the two
    /// years, or how many percent of it remained if `remaining` is set.
    pub fn code_decrease_percent(&self, code: &str, remaining: bool) -> Result<f64, Error> {
        let ratio = self.to.value(code)? / self.from.value(code)?;
        let ratio = if remaining { ratio } else { 1.0 - ratio };
        Ok(ratio * 100.0)
    }

    fn sector_to_str(&self) -> Result<String, Error> {
        Ok(czech_float_for_html(self.to.value(self.sector.id())?, 2))
    }

    fn change_str(&self) -> Result<String, Error> {
        Ok(format!("{:.0}", self.change_percent()?))
    }

    fn decrease_str(&self, code: &str) -> Result<String, Error> {
        Ok(format!("{:.0}", self.code_decrease_percent(code, false)?))
    }
}

impl Figures for EvolutionFigures<'_> {
    fn sector(&self) -> Sector {
        self.sector
    }
}

impl<'a> Narratives<EvolutionFigures<'a>> {
    /// Returns the Czech evolution texts for Czechia and the EU.
    ///
    /// Buildings and agriculture also have a generic text for other areas.
    pub fn czech_evolutions() -> Self {
        let mut narratives = Self::new();
        narratives
            .register(NarrativeKey::new(Sector::ElectricityHeat, Some(Geo::CZ)), electricity_cz)
            .register(NarrativeKey::new(Sector::ElectricityHeat, Some(Geo::EU27)), electricity_eu)
            .register(NarrativeKey::new(Sector::Industry, Some(Geo::CZ)), industry_cz)
            .register(NarrativeKey::new(Sector::Industry, Some(Geo::EU27)), industry_eu)
            .register(NarrativeKey::new(Sector::Transport, Some(Geo::CZ)), transport_cz)
            .register(NarrativeKey::new(Sector::Transport, Some(Geo::EU27)), transport_eu)
            .register(NarrativeKey::new(Sector::Waste, Some(Geo::CZ)), waste_cz)
            .register(NarrativeKey::new(Sector::Waste, Some(Geo::EU27)), waste_eu)
            .register(NarrativeKey::new(Sector::Buildings, None), buildings)
            .register(NarrativeKey::new(Sector::Buildings, Some(Geo::CZ)), buildings_cz)
            .register(NarrativeKey::new(Sector::Agriculture, None), agriculture)
            .register(NarrativeKey::new(Sector::Agriculture, Some(Geo::CZ)), agriculture_cz);
        narratives
    }
}

fn electricity_cz(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    electricity(
        f,
        "Tyto emise pochází především ze spalování hnědého uhlí v elektrárnách a v posledních desetiletích spíše stagnují, a to i přesto, že v roce 2002 byla spuštěna Jaderná elektrárna Temelín.",
    )
}

fn electricity_eu(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    electricity(
        f,
        "Tyto emise začaly výrazněji klesat po roce 2007. V posledních letech pozorujeme jejich rychlejší pokles, který lze vzhledem k závazku EU dosáhnout do roku 2050 <glossary id=\"co2eq\">klimatické neutrality</glossary> očekávat i v budoucnu.",
    )
}

fn electricity(f: &EvolutionFigures, details: &str) -> Result<String, Error> {
    Ok(format!(
        "__Výroba elektřiny a tepla:__ Objem emisí z výroby elektřiny a tepla klesl oproti roku {} o {} % na {} milionů tun CO<sub>2</sub>eq ročně. {details} {}",
        f.year_from,
        f.change_str()?,
        f.sector_to_str()?,
        sectoral_tips(Sector::ElectricityHeat, None)?,
    ))
}

fn industry_cz(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    let details = format!(
        "Útlumem těžkého průmyslu v první polovině devadesátých let došlo k výraznému snížení emisí ze spalování fosilních paliv. Konkrétně emise ze spalování při výrobě železa a oceli klesly do roku 2000 o dvě třetiny a v roce {} se pohybovaly pod {:.0} % oproti úrovním z roku {}. Emise z (nespalovacích) průmyslových procesů přitom spíše stagnují. Například emise z výroby skla, cementu, vápna nebo amoniaku a z petrochemie se pohybují na podobných úrovních jako na začátku devadesátých let. Dlouhodobě a setrvale rostou pouze emise z F-plynů, jež nahrazují dříve používané látky poškozující ozonovou vrstvu, které jsou dnes regulované Montrealským protokolem.",
        f.year_to,
        f.code_decrease_percent("CRF1A2A", true)?,
        f.year_from,
    );
    industry(f, &details)
}

fn industry_eu(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    let year_to = f.year_to;
    let details = format!(
        "Postupným útlumem těžkého průmyslu došlo k výraznému snížení emisí ze spalování fosilních paliv. Konkrétně emise ze spalování při výrobě železa a oceli klesly do roku {year_to} o {} %. Emise z (nespalovacích) průmyslových procesů přitom do roku {year_to} klesly jen o {} %. V každé oblasti průmyslových procesů je tento pokles odlišný. Například emise z výroby cementu klesly od roku {} o {} %. K poklesu dochází i v chemickém odvětví, kdy klesly mj. emise z výroby amoniaku o {} % či emise z výroby kyseliny dusičné o {} %. Naopak mírný nárůst pozorujeme u emisí z petrochemie. K poklesu dochází i u produkce železa a oceli (o {} %) nebo produkce hliníku (o {} %). Od devadesátých let výrazně vzrostly emise z F-plynů, jež nahrazují dříve používané látky poškozující ozonovou vrstvu, které jsou dnes regulované Montrealským protokolem. Tyto emise vzrostly z nuly na 88,4 Mt CO<sub>2</sub>eq v roce 2014. Od té doby dochází k jejich poklesu, přičemž v roce {year_to} dosahovaly hodnoty {} Mt CO<sub>2</sub>eq.",
        f.decrease_str("CRF1A2A")?,
        f.decrease_str("CRF2")?,
        f.year_from,
        f.decrease_str("CRF2A1")?,
        f.decrease_str("CRF2B1")?,
        f.decrease_str("CRF2B2")?,
        f.decrease_str("CRF2C1")?,
        f.decrease_str("CRF2C3")?,
        czech_float_for_html(f.to.value("CRF2F")?, 1),
    );
    industry(f, &details)
}

fn industry(f: &EvolutionFigures, details: &str) -> Result<String, Error> {
    Ok(format!(
        "__Průmysl:__ Emise z průmyslu klesly od roku {} o {} % na {} mil. tun CO<sub>2</sub>eq ročně. {} {details}",
        f.year_from,
        f.change_str()?,
        f.sector_to_str()?,
        sectoral_tips(Sector::Industry, None)?,
    ))
}

fn transport_cz(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    transport(f, "Od roku 2014 (s výjimkou roku 2020) lze opět sledovat růst emisí.")
}

fn transport_eu(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    transport(f, "Od roku 2013 lze opět sledovat růst emisí.")
}

/// Road and air transport shares are taken from the subsector wedges of
/// `year_to`.
fn transport(f: &EvolutionFigures, growth: &str) -> Result<String, Error> {
    let total = f.to.value(Sector::Transport.id())?;
    let road = f.to.value("cars")? + f.to.value("trucks-buses")?;
    let airplanes = f.to.value("airplanes")?;
    Ok(format!(
        "__Doprava:__ Emise z dopravy vzrostly oproti roku {} o {} % na {} mil. tun CO<sub>2</sub>eq ročně. V detailním grafu napravo je po roce 2007 patrný dočasný pokles emisí v důsledku globální finanční krize a následné ekonomické recese. {growth} Emise skleníkových plynů v dopravě vznikají primárně spalováním fosilních paliv v motorech silničních dopravních prostředků. (V roce {} to bylo {:.0} % všech emisí z dopravního sektoru, {:.0} % tvořila letecká doprava.) {}",
        f.year_from,
        f.change_str()?,
        f.sector_to_str()?,
        f.year_to,
        road / total * 100.0,
        airplanes / total * 100.0,
        sectoral_tips(Sector::Transport, None)?,
    ))
}

fn buildings_cz(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    buildings_with(
        f,
        "Většina poklesu, o jednu polovinu, se uskutečnila během devadesátých let díky plynofikaci a zvyšující se energetické efektivitě budov.",
    )
}

fn buildings(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    buildings_with(f, "")
}

fn buildings_with(f: &EvolutionFigures, details: &str) -> Result<String, Error> {
    Ok(format!(
        "* __Budovy:__ Emise klesly oproti roku {} o {} % na {} mil. tun CO<sub>2</sub>eq ročně. {} {details}",
        f.year_from,
        f.change_str()?,
        f.sector_to_str()?,
        sectoral_tips(Sector::Buildings, None)?,
    ))
}

fn agriculture_cz(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    agriculture_with(
        f,
        "Právě snížení stavu chovaného dobytka se odráží v poklesu emisí, o téměř polovinu, v první polovině devadesátých let.",
    )
}

fn agriculture(f: &EvolutionFigures, _geo: Option<Geo>) -> Result<String, Error> {
    agriculture_with(f, "")
}

fn agriculture_with(f: &EvolutionFigures, details: &str) -> Result<String, Error> {
    Ok(format!(
        "__Zemědělství:__ Emise ze zemědělského sektoru klesly od roku {} o {} % na {} mil. tun CO<sub>2</sub>eq ročně. Emise pocházejí především z chovu hospodářských zvířat a z obdělávání půdy a s tím spojenými emisemi N<sub>2</sub>O. {} {details}",
        f.year_from,
        f.change_str()?,
        f.sector_to_str()?,
        sectoral_tips(Sector::Agriculture, None)?,
    ))
}

fn waste_cz(f: &EvolutionFigures, geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "__Odpadové hospodářství:__ Emise z odpadového hospodářství od devadesátých let setrvale rostou. Do roku {} stouply o {}",
        f.year_to,
        waste_common(f, geo)?,
    ))
}

fn waste_eu(f: &EvolutionFigures, geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "__Odpadové hospodářství:__ Emise z odpadového hospodářství klesají od poloviny 90. let. Do roku {} klesly o {}",
        f.year_to,
        waste_common(f, geo)?,
    ))
}

fn waste_common(f: &EvolutionFigures, geo: Option<Geo>) -> Result<String, Error> {
    Ok(format!(
        "{} % na {} mil. tun CO<sub>2</sub>eq ročně. {}",
        f.change_str()?,
        f.sector_to_str()?,
        sectoral_tips(Sector::Waste, geo)?,
    ))
}
