use super::config::{
    AssessmentConfig, LIVE_DATA_BONUS, MATCHED_CONFIDENCE, MISSING_CITY_PENALTY,
    UNMATCHED_CONFIDENCE,
};
use crate::briefing::domain::LocationQuery;
use crate::briefing::knowledge::{CityTier, CountryMatch, KnowledgeBase};
use crate::briefing::live::LiveConditions;

/// Raw modifier terms behind a score, kept apart so factors can be derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RiskSignals {
    pub base: f64,
    pub seasonal: f64,
    pub context: f64,
    pub country_match: CountryMatch,
    pub has_city: bool,
    pub live: bool,
}

impl RiskSignals {
    pub fn raw_score(&self) -> f64 {
        self.base + self.seasonal + self.context
    }

    pub fn confidence(&self) -> f64 {
        let mut confidence = if self.country_match.is_known() {
            MATCHED_CONFIDENCE
        } else {
            UNMATCHED_CONFIDENCE
        };
        if !self.has_city {
            confidence -= MISSING_CITY_PENALTY;
        }
        if self.live {
            confidence += LIVE_DATA_BONUS;
        }
        confidence
    }
}

pub(crate) fn collect_signals(
    knowledge: &KnowledgeBase,
    config: &AssessmentConfig,
    query: &LocationQuery,
    month: u32,
    live: Option<&LiveConditions>,
) -> RiskSignals {
    let country = query.country();
    let city = query.city().unwrap_or("");
    let country_risk = knowledge.country_risk(country);

    let region = knowledge.region_modifier(city) + knowledge.region_modifier(country);

    let (seasonal, local) = match live {
        Some(conditions) => (
            conditions.weather.modifier(),
            conditions.crime_level.modifier() + conditions.traffic_level.modifier(),
        ),
        None => (
            knowledge.seasonal_modifier(country, month),
            tier_modifier(config, knowledge.city_tier(city)),
        ),
    };

    RiskSignals {
        base: country_risk.base_risk,
        seasonal,
        context: region + local,
        country_match: country_risk.matched,
        has_city: query.city().is_some(),
        live: live.is_some(),
    }
}

fn tier_modifier(config: &AssessmentConfig, tier: CityTier) -> f64 {
    match tier {
        CityTier::High => config.high_tier_modifier,
        CityTier::Moderate => config.moderate_tier_modifier,
        CityTier::None => 0.0,
    }
}
