use serde::{Deserialize, Serialize};

pub(crate) const MATCHED_CONFIDENCE: f64 = 0.8;
pub(crate) const UNMATCHED_CONFIDENCE: f64 = 0.5;
pub(crate) const MISSING_CITY_PENALTY: f64 = 0.1;
pub(crate) const LIVE_DATA_BONUS: f64 = 0.1;
pub(crate) const INSUFFICIENT_DATA_CONFIDENCE: f64 = 0.3;

// Confidence is never clamped; these bounds must hold for every combination.
const _: () = assert!(MATCHED_CONFIDENCE + LIVE_DATA_BONUS <= 1.0);
const _: () = assert!(UNMATCHED_CONFIDENCE - MISSING_CITY_PENALTY >= 0.0);
const _: () = assert!(UNMATCHED_CONFIDENCE <= MATCHED_CONFIDENCE);

/// Score bounds, tier offsets and factor thresholds for the assessment rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub min_score: f64,
    pub max_score: f64,
    pub high_tier_modifier: f64,
    pub moderate_tier_modifier: f64,
    pub country_advisory_threshold: f64,
    pub seasonal_threshold: f64,
    pub context_threshold: f64,
    pub elevated_risk_threshold: f64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            min_score: 0.1,
            max_score: 0.95,
            high_tier_modifier: 0.2,
            moderate_tier_modifier: 0.1,
            country_advisory_threshold: 0.6,
            seasonal_threshold: 0.05,
            context_threshold: 0.05,
            elevated_risk_threshold: 0.4,
        }
    }
}
