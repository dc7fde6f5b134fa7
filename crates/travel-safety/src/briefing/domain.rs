use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Destination supplied by the caller for a single briefing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl LocationQuery {
    pub fn new(country: impl Into<String>, city: Option<&str>) -> Self {
        Self {
            country: country.into(),
            city: city.map(str::to_string),
        }
    }

    pub fn country(&self) -> &str {
        self.country.trim()
    }

    /// City text, with blank input treated as absent.
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// Name used in templated text; falls back to the country when no city was given.
    pub fn place(&self) -> &str {
        self.city().unwrap_or_else(|| self.country())
    }
}

/// Named reason the destination risk is elevated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    InsufficientData,
    GeneralCountryAdvisory,
    SeasonalWeatherConditions,
    SpecificLocationRisks,
    CombinedRiskFactors,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient data",
            Self::GeneralCountryAdvisory => "general country advisory",
            Self::SeasonalWeatherConditions => "seasonal weather conditions",
            Self::SpecificLocationRisks => "specific location risks",
            Self::CombinedRiskFactors => "combined risk factors",
        }
    }
}

/// Bounded risk score plus the ordered factors that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub confidence: f64,
    #[serde(serialize_with = "serialize_factor_labels")]
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn has_factor(&self, factor: RiskFactor) -> bool {
        self.factors.contains(&factor)
    }

    pub fn factor_labels(&self) -> Vec<&'static str> {
        self.factors.iter().map(|factor| factor.label()).collect()
    }

    /// Number of alerts a briefing should surface for this assessment.
    pub fn target_alert_count(&self) -> usize {
        (2.0 + self.risk_score * 5.0).round().clamp(2.0, 7.0) as usize
    }
}

fn serialize_factor_labels<S>(factors: &[RiskFactor], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(factors.iter().map(|factor| factor.label()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Weather,
    Advisory,
    Incident,
}

impl AlertCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Advisory => "advisory",
            Self::Incident => "incident",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Safety alert emitted by the generator. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub source: String,
    pub issued_at: DateTime<Utc>,
}

/// Per-category switches; every category is enabled unless explicitly disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertFilters {
    pub weather: bool,
    pub advisory: bool,
    pub incident: bool,
}

impl Default for AlertFilters {
    fn default() -> Self {
        Self {
            weather: true,
            advisory: true,
            incident: true,
        }
    }
}

impl AlertFilters {
    pub fn only(category: AlertCategory) -> Self {
        Self {
            weather: category == AlertCategory::Weather,
            advisory: category == AlertCategory::Advisory,
            incident: category == AlertCategory::Incident,
        }
    }

    pub fn allows(&self, category: AlertCategory) -> bool {
        match category {
            AlertCategory::Weather => self.weather,
            AlertCategory::Advisory => self.advisory,
            AlertCategory::Incident => self.incident,
        }
    }
}

/// Destination plus category switches, as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BriefingRequest {
    #[serde(flatten)]
    pub location: LocationQuery,
    #[serde(default)]
    pub filters: AlertFilters,
}

/// Everything a caller receives for one destination query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyBriefing {
    pub risk_assessment: RiskAssessment,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<String>,
}
