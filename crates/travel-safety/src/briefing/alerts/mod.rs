//! Candidate alert generation and severity quota selection.

mod selector;
mod templates;

pub use selector::{select_alerts, select_with_target};

use super::domain::{
    Alert, AlertCategory, AlertFilters, AlertSeverity, LocationQuery, RiskAssessment, RiskFactor,
};
use super::knowledge::{CityTier, KnowledgeBase, WeatherHazard};
use chrono::{DateTime, Datelike, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use templates::AlertTemplate;

const SEVERITIES: [AlertSeverity; 3] = [
    AlertSeverity::Low,
    AlertSeverity::Medium,
    AlertSeverity::High,
];
const HIGH_RISK_WEATHER_WEIGHTS: [u32; 3] = [1, 3, 6];
const BASELINE_WEATHER_WEIGHTS: [u32; 3] = [4, 4, 2];

const HIGH_RISK_SCORE: f64 = 0.7;
const ELEVATED_RISK_SCORE: f64 = 0.4;
const INCIDENT_RISK_SCORE: f64 = 0.6;
const MINOR_EVENT_PROBABILITY: f64 = 0.5;

/// Hazards with a dedicated weather alert template, in emission order.
const WEATHER_ALERT_HAZARDS: [WeatherHazard; 4] = [
    WeatherHazard::Hurricane,
    WeatherHazard::Monsoon,
    WeatherHazard::Heat,
    WeatherHazard::Cold,
];

/// Builds the unordered candidate pool of weather, advisory and incident alerts.
#[derive(Debug, Clone)]
pub struct AlertGenerator {
    knowledge: Arc<KnowledgeBase>,
}

impl AlertGenerator {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        query: &LocationQuery,
        filters: &AlertFilters,
        assessment: &RiskAssessment,
        issued_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Alert> {
        let mut pool = Vec::new();
        let draft = AlertDraft { issued_at };

        if filters.allows(AlertCategory::Weather) {
            self.weather_alerts(query, assessment, &draft, rng, &mut pool);
        }
        if filters.allows(AlertCategory::Advisory) {
            self.advisory_alerts(query, assessment, &draft, rng, &mut pool);
        }
        if filters.allows(AlertCategory::Incident) {
            incident_alerts(query, assessment, &draft, rng, &mut pool);
        }

        pool
    }

    fn weather_alerts<R: Rng + ?Sized>(
        &self,
        query: &LocationQuery,
        assessment: &RiskAssessment,
        draft: &AlertDraft,
        rng: &mut R,
        pool: &mut Vec<Alert>,
    ) {
        let place = query.place();

        if !assessment.has_factor(RiskFactor::SeasonalWeatherConditions) {
            pool.push(draft.build(
                AlertCategory::Weather,
                AlertSeverity::Low,
                &templates::CALM_WEATHER,
                place,
            ));
            return;
        }

        let active = self
            .knowledge
            .hazards(query.country(), draft.issued_at.month());
        let before = pool.len();
        for hazard in WEATHER_ALERT_HAZARDS {
            if !active.contains(&hazard) {
                continue;
            }
            if let Some(template) = templates::seasonal_weather(hazard) {
                let severity = weather_severity(assessment, rng);
                pool.push(draft.build(AlertCategory::Weather, severity, &template, place));
            }
        }

        if pool.len() == before {
            let severity = weather_severity(assessment, rng);
            pool.push(draft.build(
                AlertCategory::Weather,
                severity,
                &templates::GENERIC_WEATHER,
                place,
            ));
        }
    }

    fn advisory_alerts<R: Rng + ?Sized>(
        &self,
        query: &LocationQuery,
        assessment: &RiskAssessment,
        draft: &AlertDraft,
        rng: &mut R,
        pool: &mut Vec<Alert>,
    ) {
        let place = query.place();
        let title = templates::ADVISORY_TITLE.replace("{place}", place);
        let score = assessment.risk_score;

        let (severity, description) = if score > HIGH_RISK_SCORE {
            (
                AlertSeverity::High,
                templates::ADVISORY_HIGH.replace("{place}", place),
            )
        } else if score > ELEVATED_RISK_SCORE {
            let reason = templates::ADVISORY_CAUTION_REASONS
                .choose(rng)
                .copied()
                .unwrap_or("local conditions");
            (
                AlertSeverity::Medium,
                templates::advisory_caution(place, reason),
            )
        } else {
            (
                AlertSeverity::Low,
                templates::ADVISORY_NORMAL.replace("{place}", place),
            )
        };
        pool.push(draft.alert(AlertCategory::Advisory, severity, title, description));

        if self.knowledge.is_extreme_risk(query.country()) {
            pool.push(draft.build(
                AlertCategory::Advisory,
                AlertSeverity::High,
                &templates::EXTREME_RISK,
                query.country(),
            ));
        }

        if let Some(city) = query.city() {
            if self.knowledge.city_tier(city) == CityTier::High {
                pool.push(draft.build(
                    AlertCategory::Advisory,
                    AlertSeverity::High,
                    &templates::HIGH_CRIME_CITY,
                    city,
                ));
            }
        }
    }
}

fn incident_alerts<R: Rng + ?Sized>(
    query: &LocationQuery,
    assessment: &RiskAssessment,
    draft: &AlertDraft,
    rng: &mut R,
    pool: &mut Vec<Alert>,
) {
    let place = query.place();
    let score = assessment.risk_score;

    if score > INCIDENT_RISK_SCORE {
        let severity = if score > HIGH_RISK_SCORE {
            AlertSeverity::Medium
        } else {
            AlertSeverity::Low
        };
        let count = rng.gen_range(1..=3);
        for _ in 0..count {
            if let Some(template) = templates::INCIDENTS.choose(rng) {
                pool.push(draft.build(AlertCategory::Incident, severity, template, place));
            }
        }
    } else if rng.gen_bool(MINOR_EVENT_PROBABILITY) {
        pool.push(draft.build(
            AlertCategory::Incident,
            AlertSeverity::Low,
            &templates::MINOR_EVENT,
            place,
        ));
    }
}

fn weather_severity<R: Rng + ?Sized>(assessment: &RiskAssessment, rng: &mut R) -> AlertSeverity {
    let weights = if assessment.risk_score > HIGH_RISK_SCORE {
        HIGH_RISK_WEATHER_WEIGHTS
    } else {
        BASELINE_WEATHER_WEIGHTS
    };

    WeightedIndex::new(weights)
        .map(|distribution| SEVERITIES[distribution.sample(rng)])
        .unwrap_or(AlertSeverity::Medium)
}

/// Shared fields for every alert in one generation pass.
struct AlertDraft {
    issued_at: DateTime<Utc>,
}

impl AlertDraft {
    fn build(
        &self,
        category: AlertCategory,
        severity: AlertSeverity,
        template: &AlertTemplate,
        place: &str,
    ) -> Alert {
        let (title, description) = template.render(place);
        self.alert(category, severity, title, description)
    }

    fn alert(
        &self,
        category: AlertCategory,
        severity: AlertSeverity,
        title: String,
        description: String,
    ) -> Alert {
        let source = match category {
            AlertCategory::Weather => templates::WEATHER_SOURCE,
            AlertCategory::Advisory => templates::ADVISORY_SOURCE,
            AlertCategory::Incident => templates::INCIDENT_SOURCE,
        };

        Alert {
            category,
            severity,
            title,
            description,
            source: source.to_string(),
            issued_at: self.issued_at,
        }
    }
}
