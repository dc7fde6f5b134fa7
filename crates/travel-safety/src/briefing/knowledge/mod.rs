//! Static destination knowledge: country risk, region keywords, seasonal windows,
//! city tiers and the weather hazard calendar.
//!
//! A `KnowledgeBase` is read-only once built. `KnowledgeBase::standard()` carries the
//! shipped tables; tests assemble smaller bases with the `with_*` builders.

mod import;
mod tables;

pub use import::KnowledgeBaseError;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Base risk for countries the tables do not know.
pub const NEUTRAL_BASE_RISK: f64 = 0.5;

/// How a country string was resolved against the base-risk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryMatch {
    Exact,
    Partial,
    Unknown,
}

impl CountryMatch {
    pub fn is_known(self) -> bool {
        !matches!(self, CountryMatch::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryRisk {
    pub base_risk: f64,
    pub matched: CountryMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityTier {
    None,
    Moderate,
    High,
}

/// Months during which a set of countries carries extra seasonal risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalWindow {
    pub name: String,
    pub months: BTreeSet<u32>,
    pub countries: BTreeSet<String>,
    pub modifier: f64,
}

impl SeasonalWindow {
    pub fn new(name: &str, months: &[u32], countries: &[&str], modifier: f64) -> Self {
        Self {
            name: name.to_string(),
            months: months.iter().copied().collect(),
            countries: countries.iter().map(|country| normalize(country)).collect(),
            modifier,
        }
    }

    fn applies_to(&self, country: &str, month: u32) -> bool {
        self.months.contains(&month) && self.countries.contains(country)
    }
}

/// Weather hazard families used to pick seasonal tips and alert templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherHazard {
    Hurricane,
    Monsoon,
    Heat,
    Cold,
    Flood,
}

impl WeatherHazard {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hurricane => "hurricane",
            Self::Monsoon => "monsoon",
            Self::Heat => "heat",
            Self::Cold => "cold",
            Self::Flood => "flood",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardWindow {
    pub hazard: WeatherHazard,
    pub months: BTreeSet<u32>,
    pub countries: BTreeSet<String>,
}

impl HazardWindow {
    pub fn new(hazard: WeatherHazard, months: &[u32], countries: &[&str]) -> Self {
        Self {
            hazard,
            months: months.iter().copied().collect(),
            countries: countries.iter().map(|country| normalize(country)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeBase {
    country_risks: BTreeMap<String, f64>,
    region_modifiers: Vec<(String, f64)>,
    seasonal_windows: Vec<SeasonalWindow>,
    high_risk_cities: BTreeSet<String>,
    moderate_risk_cities: BTreeSet<String>,
    hazard_windows: Vec<HazardWindow>,
    extreme_risk_countries: BTreeSet<String>,
}

impl KnowledgeBase {
    /// Knowledge base with no entries; every lookup falls back to its neutral value.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        tables::standard_knowledge_base()
    }

    pub fn with_country_risk(mut self, country: &str, base_risk: f64) -> Self {
        self.country_risks.insert(normalize(country), base_risk);
        self
    }

    pub fn with_region_modifier(mut self, keyword: &str, modifier: f64) -> Self {
        self.region_modifiers.push((normalize(keyword), modifier));
        self
    }

    pub fn with_seasonal_window(mut self, window: SeasonalWindow) -> Self {
        self.seasonal_windows.push(window);
        self
    }

    pub fn with_city(mut self, tier: CityTier, city: &str) -> Self {
        let city = normalize(city);
        match tier {
            CityTier::High => {
                self.high_risk_cities.insert(city);
            }
            CityTier::Moderate => {
                self.moderate_risk_cities.insert(city);
            }
            CityTier::None => {}
        }
        self
    }

    pub fn with_hazard_window(mut self, window: HazardWindow) -> Self {
        self.hazard_windows.push(window);
        self
    }

    pub fn with_extreme_risk_country(mut self, country: &str) -> Self {
        self.extreme_risk_countries.insert(normalize(country));
        self
    }

    pub fn country_count(&self) -> usize {
        self.country_risks.len()
    }

    /// Resolve a country's base risk: exact key, then the first key (in lexicographic
    /// order) that contains or is contained by the query, then the neutral default.
    ///
    /// The partial step can pair unrelated names that share a substring
    /// ("somaliland" resolves to "mali"); callers depend on it, so it stays.
    pub fn country_risk(&self, country: &str) -> CountryRisk {
        let key = normalize(country);
        if key.is_empty() {
            return CountryRisk {
                base_risk: NEUTRAL_BASE_RISK,
                matched: CountryMatch::Unknown,
            };
        }

        if let Some(risk) = self.country_risks.get(&key) {
            return CountryRisk {
                base_risk: *risk,
                matched: CountryMatch::Exact,
            };
        }

        self.country_risks
            .iter()
            .find(|(known, _)| known.contains(key.as_str()) || key.contains(known.as_str()))
            .map(|(_, risk)| CountryRisk {
                base_risk: *risk,
                matched: CountryMatch::Partial,
            })
            .unwrap_or(CountryRisk {
                base_risk: NEUTRAL_BASE_RISK,
                matched: CountryMatch::Unknown,
            })
    }

    pub fn base_risk(&self, country: &str) -> f64 {
        self.country_risk(country).base_risk
    }

    /// Sum of the modifiers for every region keyword contained in `text`.
    pub fn region_modifier(&self, text: &str) -> f64 {
        let text = normalize(text);
        if text.is_empty() {
            return 0.0;
        }

        self.region_modifiers
            .iter()
            .filter(|(keyword, _)| text.contains(keyword.as_str()))
            .map(|(_, modifier)| modifier)
            .sum()
    }

    /// Sum of the modifiers of every seasonal window covering `country` in `month`.
    pub fn seasonal_modifier(&self, country: &str, month: u32) -> f64 {
        let country = normalize(country);
        if country.is_empty() {
            return 0.0;
        }

        self.seasonal_windows
            .iter()
            .filter(|window| window.applies_to(&country, month))
            .map(|window| window.modifier)
            .sum()
    }

    /// Names of the seasonal windows active for `country` in `month`.
    pub fn active_seasons(&self, country: &str, month: u32) -> Vec<&str> {
        let country = normalize(country);
        self.seasonal_windows
            .iter()
            .filter(|window| window.applies_to(&country, month))
            .map(|window| window.name.as_str())
            .collect()
    }

    pub fn city_tier(&self, city: &str) -> CityTier {
        let city = normalize(city);
        if city.is_empty() {
            return CityTier::None;
        }

        let listed = |cities: &BTreeSet<String>| {
            cities.iter().any(|known| city.contains(known.as_str()))
        };

        if listed(&self.high_risk_cities) {
            CityTier::High
        } else if listed(&self.moderate_risk_cities) {
            CityTier::Moderate
        } else {
            CityTier::None
        }
    }

    /// Hazards whose calendar covers `country` in `month`, in calendar order.
    pub fn hazards(&self, country: &str, month: u32) -> Vec<WeatherHazard> {
        let country = normalize(country);
        let mut hazards = Vec::new();
        for window in &self.hazard_windows {
            if window.months.contains(&month)
                && window.countries.contains(&country)
                && !hazards.contains(&window.hazard)
            {
                hazards.push(window.hazard);
            }
        }
        hazards
    }

    pub fn is_extreme_risk(&self, country: &str) -> bool {
        self.extreme_risk_countries.contains(&normalize(country))
    }
}

pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
