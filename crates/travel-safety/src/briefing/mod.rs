//! Destination risk scoring pipeline.
//!
//! A briefing runs the risk assessment, feeds the result to the recommendation engine
//! and the alert generator, and trims the alert pool with severity quotas. Every random
//! draw goes through the caller's `rand::Rng`, so a seeded generator reproduces a
//! briefing exactly.

pub mod alerts;
pub mod assessment;
pub mod domain;
pub mod knowledge;
pub mod live;
pub mod recommendations;
pub mod service;

#[cfg(test)]
mod tests;

pub use alerts::{select_alerts, select_with_target, AlertGenerator};
pub use assessment::{AssessmentConfig, RiskAssessmentEngine};
pub use domain::{
    Alert, AlertCategory, AlertFilters, AlertSeverity, BriefingRequest, LocationQuery,
    RiskAssessment, RiskFactor, SafetyBriefing,
};
pub use knowledge::{
    CityTier, CountryMatch, CountryRisk, HazardWindow, KnowledgeBase, KnowledgeBaseError,
    SeasonalWindow, WeatherHazard,
};
pub use live::{
    CrimeLevel, LiveConditions, LiveConditionsError, LiveConditionsProvider, TrafficLevel,
    WeatherCondition,
};
pub use recommendations::{RecommendationEngine, TipPools};
pub use service::SafetyBriefingService;
