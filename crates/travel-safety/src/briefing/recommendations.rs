use super::domain::{LocationQuery, RiskAssessment, RiskFactor};
use super::knowledge::{KnowledgeBase, WeatherHazard};
use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

const GENERAL_TIP_COUNT: usize = 3;
const HIGH_RISK_TIP_COUNT: usize = 2;
const HIGH_RISK_SCORE: f64 = 0.6;

/// Hazards that carry their own tip pool, in the order tips are appended.
const SEASONAL_TIP_HAZARDS: [WeatherHazard; 4] = [
    WeatherHazard::Hurricane,
    WeatherHazard::Heat,
    WeatherHazard::Cold,
    WeatherHazard::Flood,
];

/// Fixed tip pools. Pools may share entries; the engine removes duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipPools {
    pub general: Vec<String>,
    pub high_risk: Vec<String>,
    pub hurricane: Vec<String>,
    pub heat: Vec<String>,
    pub cold: Vec<String>,
    pub flood: Vec<String>,
}

impl TipPools {
    pub fn standard() -> Self {
        Self {
            general: owned(&[
                "Register your trip with your embassy's traveler enrollment program",
                "Keep digital and paper copies of your passport and visas",
                "Share your itinerary with someone at home",
                "Purchase travel insurance that covers medical evacuation",
                "Save local emergency numbers in your phone",
                "Use licensed taxis or reputable ride-share services",
                "Stay informed through local news and official channels",
            ]),
            high_risk: owned(&[
                "Avoid large crowds and political demonstrations",
                "Vary your daily routes and routines",
                "Keep a low profile and avoid displaying valuables",
                "Locate the nearest embassy or consulate on arrival",
                "Keep a bag with essentials ready in case you need to leave quickly",
            ]),
            hurricane: owned(&[
                "Monitor local hurricane and storm advisories daily",
                "Learn your accommodation's evacuation route",
                "Prefer refundable bookings during storm season",
                "Stay informed through local news and official channels",
            ]),
            heat: owned(&[
                "Carry water and stay hydrated throughout the day",
                "Avoid strenuous outdoor activity during midday heat",
                "Wear a hat and high-SPF sunscreen outdoors",
            ]),
            cold: owned(&[
                "Pack insulated, layered clothing",
                "Check road conditions before driving in winter weather",
                "Allow extra travel time for snow and ice delays",
            ]),
            flood: owned(&[
                "Never walk or drive through flood water",
                "Keep documents and electronics in waterproof bags",
                "Confirm your accommodation is outside flood-prone areas",
            ]),
        }
    }

    pub fn seasonal(&self, hazard: WeatherHazard) -> &[String] {
        match hazard {
            WeatherHazard::Hurricane => &self.hurricane,
            WeatherHazard::Heat => &self.heat,
            WeatherHazard::Cold => &self.cold,
            WeatherHazard::Flood => &self.flood,
            WeatherHazard::Monsoon => &[],
        }
    }
}

fn owned(tips: &[&str]) -> Vec<String> {
    tips.iter().map(|tip| tip.to_string()).collect()
}

/// Maps an assessment to a personalized, duplicate-free tip list.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    knowledge: Arc<KnowledgeBase>,
    pools: TipPools,
}

impl RecommendationEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>, pools: TipPools) -> Self {
        Self { knowledge, pools }
    }

    pub fn recommend<R: Rng + ?Sized>(
        &self,
        query: &LocationQuery,
        assessment: &RiskAssessment,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<String> {
        let mut tips: Vec<&String> = self
            .pools
            .general
            .choose_multiple(rng, GENERAL_TIP_COUNT)
            .collect();

        if assessment.risk_score > HIGH_RISK_SCORE {
            tips.extend(self.pools.high_risk.choose_multiple(rng, HIGH_RISK_TIP_COUNT));
        }

        if assessment.has_factor(RiskFactor::SeasonalWeatherConditions) {
            let active = self.knowledge.hazards(query.country(), today.month());
            for hazard in SEASONAL_TIP_HAZARDS {
                if !active.contains(&hazard) {
                    continue;
                }
                if let Some(tip) = self.pools.seasonal(hazard).choose(rng) {
                    tips.push(tip);
                }
            }
        }

        dedupe(tips)
    }
}

/// Drop repeated strings, keeping the first occurrence.
fn dedupe(tips: Vec<&String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(tips.len());
    for tip in tips {
        if seen.insert(tip) {
            unique.push(tip.clone());
        }
    }
    unique
}
