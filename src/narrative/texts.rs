// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Fixed paragraphs that accompany the emission charts, and the per-sector
//! tips shared by the summary and evolution texts.

use crate::geo::Geo;
use crate::sectors::Sector;
use crate::Error;

/// Describes which gases the charts include.
pub fn gases_info() -> &'static str {
    "Všechny hodnoty v grafu jsou <glossary id=\"antropogennisklenikoveplyny\">antropogenní emise</glossary> skleníkových plynů CO<sub>2</sub>, N<sub>2</sub>O, CH<sub>4</sub>, HFC, PFC, SF<sub>6</sub>, NF<sub>3</sub> vyjádřené jako <glossary id=\"co2eq\">CO<sub>2</sub>eq</glossary>. Jednotka CO<sub>2</sub> ekvivalent zohledňuje dlouhodobý efekt skleníkových plynů v atmosféře a převádí je na množství CO<sub>2</sub>, které by mělo stejný efekt. Více viz článek [Global warming potential](https://en.wikipedia.org/wiki/Global_warming_potential)."
}

/// Describes where the inventory data come from.
pub fn methodology_info() -> &'static str {
    "Emisní inventura poskytovaná Eurostatem využívá formát a strukturu dat CRF (_Common Reporting Format_). Veškerá metodika k výpočtům a reportingu je na stránkách národního programu inventarizace emisí ([NGGIP – national greenhouse gas inventory programme](https://www.ipcc-nggip.iges.or.jp/)) a je závazná pro všechny státy [UNFCCC](https://cs.wikipedia.org/wiki/R%C3%A1mcov%C3%A1_%C3%BAmluva_OSN_o_zm%C4%9Bn%C4%9B_klimatu). Data o emisích poskytují Eurostatu jednotlivé země EU – data za Českou republiku sestavuje ČHMÚ, podílí se na tom ovšem více českých institucí."
}

/// Explains why LULUCF is left out of the charts.
///
/// `lulucf_emissions` is the already formatted LULUCF figure for `year`.
pub fn lulucf_info(year: i32, lulucf_emissions: &str) -> String {
    format!(
        "Pro snadnější možnost srovnávání emisí [napříč státy EU](/infografiky/emise-vybrane-staty) vynecháváme kategorii lesnictví a využití půdy (která bývá označována _LULUCF_ podle anglického _Land use, land use change, forestry_). Díky ukládání uhlíku v zeleni má totiž tato kategorie ve většině států EU záporné emise, což komplikuje vizualizaci. Sektor LULUCF se také často ze srovnávání [vynechává](https://climateactiontracker.org/methodology/indc-ratings-and-lulucf/), protože jednak obsahuje vysokou nejistotu v datech, neboť záporné hodnoty mohou zakrývat _strukturální_ emise z energetiky, průmyslu a zemědělství, a jednak je tento sektor náchylnější na výkyvy v čase. Právě v Česku jsme v posledních letech svědky výrazného výkyvu kvůli masivní těžbě dřeva při kůrovcové kalamitě. Za rok {year} byly podle odhadů emise v tomto sektoru _kladné_ ve výši {lulucf_emissions} Mt CO<sub>2</sub>eq."
    )
}

/// Explains that the charts show produced, not consumed, emissions.
///
/// Only available for Czechia, Slovakia, the EU, and areas in general.
pub fn trade_and_flights_info(geo: Option<Geo>) -> Result<String, Error> {
    let flights = flights_info(geo)?;
    match geo {
        None | Some(Geo::CZ) => Ok(format!(
            "Údaje odpovídají emisím vyprodukovaným v dané zemi, avšak vzhledem k vývozu a dovozu zboží nemusejí odpovídat emisím vzniklých ze spotřeby v dané zemi. ČR například do dalších zemí EU vyváží elektřinu, ocel, automobily apod. a dováží zboží z jiných zemí EU nebo z Číny. Zahrnutí letecké dopravy je podobně problematické – zobrazený příspěvek letecké dopravy odpovídá emisím vyprodukovaným {flights}."
        )),
        Some(Geo::SK) => Ok(format!(
            "Údaje odpovídají emisím vyprodukovaným v dané zemi, avšak vzhledem k vývozu a dovozu zboží nemusejí odpovídat emisím vzniklých ze spotřeby v dané zemi. Slovensko například do dalších zemí EU vyváží automobily, ocel apod. a dováží zboží z jiných zemí EU nebo z Číny. Zahrnutí letecké dopravy je podobně problematické – zobrazený příspěvek letecké dopravy odpovídá emisím vyprodukovaným {flights}."
        )),
        Some(Geo::EU27) => Ok(format!(
            "Údaje odpovídají emisím vyprodukovaným v Evropské unii, avšak vzhledem k vývozu a dovozu zboží nemusejí odpovídat emisím vzniklých ze spotřeby. Země EU např. do třetích zemí mimo EU vyváží ocel, automobily apod. a dováží zboží z jiných třetích zemí, např. z Číny. Zahrnutí letecké dopravy je podobně problematické - zobrazený příspěvek letecké dopravy odpovídá emisím vyprodukovaným {flights}."
        )),
        Some(g) => Err(no_text_for("trade and flights", g)),
    }
}

/// Describes which flights the aviation emissions of an area cover.
pub fn flights_info(geo: Option<Geo>) -> Result<&'static str, Error> {
    match geo {
        None => Ok("lety z letišť v dané zemi. Je tedy pravděpodobně podhodnocený (mnoho Čechů létá z Vídně či Bratislavy) a neodpovídá zcela množství emisí, které Češi způsobí (typicky např. let českého člověka do New Yorku s přestupem v Amsterdamu se započítá do zobrazených emisí jen jako Praha–Amsterdam, zatímco emise z letu Amsterdam–New York se započtou Nizozemsku). Není také započítáno, že emise vypuštěné vysoko v atmosféře mají přibližně dvojnásobný efekt"),
        Some(Geo::CZ) => Ok("lety z letišť v ČR. Je tedy pravděpodobně podhodnocený (mnoho Čechů létá z Vídně či Bratislavy) a neodpovídá zcela množství emisí, které Češi způsobí (typicky např. let českého člověka do New Yorku s přestupem v Amsterdamu se započítá do zobrazených emisí jen jako Praha–Amsterdam, zatímco emise z letu Amsterdam–New York se započtou Nizozemsku). Není také započítáno, že emise vypuštěné vysoko v atmosféře mají přibližně dvojnásobný efekt"),
        Some(Geo::SK) => Ok("lety z letišť na Slovensku. Je to tedy pravděpodobně podhodnocený údaj (mnoho Slováků létá z Vídně) a neodpovídá zcela množství emisí, které Slováci způsobí (typicky např. let z Bratislavy do New Yorku s přestupem v Dublinu se započítá do zobrazených emisí jen jako Bratislava–Dublin, zatímco emise z letu Dublin–New York se započtou Irsku). Není také započítáno, že emise vypuštěné vysoko v atmosféře mají přibližně dvojnásobný efekt"),
        Some(Geo::EU27) => Ok("lety z letišť v EU. Pravděpodobně tedy zcela neodpovídá množství emisí, které Evropané způsobí (typicky např. let člověka z Vídně do Limy s přestupem v Atlantě se započítá do zobrazených emisí jen jako Vídeň–Atlanta, zatímco emise z letu Atlanta–Lima se započtou USA). Není také započítáno, že emise vypuštěné vysoko v atmosféře mají přibližně dvojnásobný efekt"),
        Some(g) => Err(no_text_for("flights", g)),
    }
}

/// Returns what the sector covers and how its emissions can be reduced.
pub fn sectoral_tips(sector: Sector, geo: Option<Geo>) -> Result<String, Error> {
    let tips = match sector {
        Sector::Industry => "V této kategorii jsou zahrnuty tři druhy emisí. Za prvé jde o emise ze spalování fosilních paliv v průmyslu (např. koksu ve vysokých pecích nebo zemního plynu v cementárně). Za druhé jde o procesní emise, které vznikají chemickou reakcí při výrobním procesu – například při redukci uhlíku z železné rudy nebo při kalcinaci vápence při výrobě cementu. Za třetí jde o úniky skleníkových plynů související s průmyslem – například úniky F-plynů při jejich používání v chladících průmyslových produktech nebo úniky metanu při těžbě uhlí či v plynárenské infrastruktuře.",
        Sector::Transport => "Snížit emise z dopravy je možné přechodem na alternativní druhy pohonu (např. na biometan, CNG, vodík nebo na elektřinu při souběžné transformaci energetiky), zvýšením podílu hromadné (vlakové a autobusové) dopravy a snížením počtu vozidel na silnicích. Objem silniční dopravy lze snížit zvýšením obsazeností vozidel (spolujízdou) či obecně snížením nutnosti dopravy (např. prací na dálku).",
        Sector::ElectricityHeat => "Emise skleníkových plynů původem z energetiky je možné snížit energetickými úsporami a rozvojem obnovitelných a nízkouhlíkových zdrojů energie.",
        Sector::Buildings => "Jde o topení a ohřev vody v domácnostech, kancelářích a institucích (pokud energie není dodávána z teplárny) a také o vaření plynem. Průmyslové budovy jsou zahrnuty v kategorii Průmysl.",
        Sector::Agriculture => "K omezení emisí metanu ze zemědělství by vedlo snížení počtu chovaného dobytka (a s tím související snížení spotřeby hovězího masa a mléčných výrobků), změna nakládání se statkovými hnojivy (například jejich stabilizací v bioplynových stanicích) a méně intenzivní hnojení průmyslovými hnojivy. Omezení chovu dobytka však může mít i negativní dopad na kvalitu půdy, dostupnost přírodního hnojiva atd.",
        Sector::Waste => {
            let solution = if geo == Some(Geo::CZ) {
                " Řešením může být zákaz skládkování využitelných odpadů po vzoru většiny zemí EU a využití biologicky rozložitelných odpadů k produkci biometanu, který se namísto zemního plynu může využít například v dopravě."
            } else {
                ""
            };
            return Ok(format!(
                "Emise z odpadového hospodářství produkují především skládky odpadu, ze kterých do atmosféry uniká metan. Ten vzniká rozkladem biologicky rozložitelného materiálu (papíru, kartonu, textilií a bioodpadu) v tělese skládky.{solution}"
            ));
        }
        Sector::Other => {
            return Err(Error::missing_template(format!(
                "No tips for sector {sector}."
            )))
        }
    };
    Ok(tips.to_string())
}

fn no_text_for(topic: &str, geo: Geo) -> Error {
    Error::missing_template(format!("No {topic} text for geo {geo}."))
}
