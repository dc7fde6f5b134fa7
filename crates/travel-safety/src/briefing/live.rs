use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Rain,
    Storm,
    Extreme,
}

impl WeatherCondition {
    /// Stands in for the seasonal modifier when live data is available.
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Clear => 0.0,
            Self::Rain => 0.03,
            Self::Storm => 0.1,
            Self::Extreme => 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrimeLevel {
    Low,
    Moderate,
    High,
}

impl CrimeLevel {
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Low => -0.05,
            Self::Moderate => 0.05,
            Self::High => 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Light => 0.0,
            Self::Moderate => 0.02,
            Self::Heavy => 0.05,
        }
    }
}

/// Real-time signals for a city, as reported by an external feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveConditions {
    pub weather: WeatherCondition,
    pub crime_level: CrimeLevel,
    pub traffic_level: TrafficLevel,
    pub as_of: DateTime<Utc>,
}

/// Outbound hook for live weather/crime/traffic feeds. Implementations own their
/// retry policy; a failure is reported once and the briefing proceeds without live data.
pub trait LiveConditionsProvider: Send + Sync {
    fn fetch(&self, city: &str) -> Result<LiveConditions, LiveConditionsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LiveConditionsError {
    #[error("live conditions unavailable: {0}")]
    Unavailable(String),
    #[error("live conditions request timed out")]
    Timeout,
    #[error("malformed live conditions payload: {0}")]
    Malformed(String),
}
