// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Geographical areas for which emission inventories are published.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An EU member state, or the EU as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Geo {
    AT,
    BE,
    BG,
    CY,
    CZ,
    DE,
    DK,
    EE,
    EL,
    ES,
    FI,
    FR,
    HR,
    HU,
    IE,
    IT,
    LT,
    LU,
    LV,
    MT,
    NL,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
    #[serde(rename = "EU27_2020")]
    EU27,
}

impl Geo {
    /// The 27 member states, without the EU aggregate.
    pub const MEMBER_STATES: [Geo; 27] = [
        Geo::AT,
        Geo::BE,
        Geo::BG,
        Geo::CY,
        Geo::CZ,
        Geo::DE,
        Geo::DK,
        Geo::EE,
        Geo::EL,
        Geo::ES,
        Geo::FI,
        Geo::FR,
        Geo::HR,
        Geo::HU,
        Geo::IE,
        Geo::IT,
        Geo::LT,
        Geo::LU,
        Geo::LV,
        Geo::MT,
        Geo::NL,
        Geo::PL,
        Geo::PT,
        Geo::RO,
        Geo::SE,
        Geo::SI,
        Geo::SK,
    ];

    /// Returns the code of the area, as used by Eurostat.
    pub fn code(self) -> &'static str {
        match self {
            Geo::AT => "AT",
            Geo::BE => "BE",
            Geo::BG => "BG",
            Geo::CY => "CY",
            Geo::CZ => "CZ",
            Geo::DE => "DE",
            Geo::DK => "DK",
            Geo::EE => "EE",
            Geo::EL => "EL",
            Geo::ES => "ES",
            Geo::FI => "FI",
            Geo::FR => "FR",
            Geo::HR => "HR",
            Geo::HU => "HU",
            Geo::IE => "IE",
            Geo::IT => "IT",
            Geo::LT => "LT",
            Geo::LU => "LU",
            Geo::LV => "LV",
            Geo::MT => "MT",
            Geo::NL => "NL",
            Geo::PL => "PL",
            Geo::PT => "PT",
            Geo::RO => "RO",
            Geo::SE => "SE",
            Geo::SI => "SI",
            Geo::SK => "SK",
            Geo::EU27 => "EU27_2020",
        }
    }

    /// Returns the Czech name of the area.
    pub fn name_cs(self) -> &'static str {
        match self {
            Geo::AT => "Rakousko",
            Geo::BE => "Belgie",
            Geo::BG => "Bulharsko",
            Geo::CY => "Kypr",
            Geo::CZ => "Česko",
            Geo::DE => "Německo",
            Geo::DK => "Dánsko",
            Geo::EE => "Estonsko",
            Geo::EL => "Řecko",
            Geo::ES => "Španělsko",
            Geo::FI => "Finsko",
            Geo::FR => "Francie",
            Geo::HR => "Chorvatsko",
            Geo::HU => "Maďarsko",
            Geo::IE => "Irsko",
            Geo::IT => "Itálie",
            Geo::LT => "Litva",
            Geo::LU => "Lucembursko",
            Geo::LV => "Lotyšsko",
            Geo::MT => "Malta",
            Geo::NL => "Nizozemsko",
            Geo::PL => "Polsko",
            Geo::PT => "Portugalsko",
            Geo::RO => "Rumunsko",
            Geo::SE => "Švédsko",
            Geo::SI => "Slovinsko",
            Geo::SK => "Slovensko",
            Geo::EU27 => "Evropská unie",
        }
    }
}

impl std::fmt::Display for Geo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Geo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Geo::EU27.code() {
            return Ok(Geo::EU27);
        }
        Geo::MEMBER_STATES
            .into_iter()
            .find(|g| g.code() == s)
            .ok_or_else(|| Error::parse(format!("Unknown geo code: {s}")))
    }
}
