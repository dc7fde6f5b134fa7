mod config;
mod factors;
mod rules;

pub use config::AssessmentConfig;

use super::domain::{LocationQuery, RiskAssessment, RiskFactor};
use super::knowledge::KnowledgeBase;
use super::live::LiveConditions;
use chrono::{Datelike, NaiveDate};
use config::INSUFFICIENT_DATA_CONFIDENCE;
use factors::derive_factors;
use std::sync::Arc;
use tracing::debug;

/// Stateless scorer combining knowledge-base lookups with the calendar month.
#[derive(Debug, Clone)]
pub struct RiskAssessmentEngine {
    knowledge: Arc<KnowledgeBase>,
    config: AssessmentConfig,
}

impl RiskAssessmentEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_config(knowledge, AssessmentConfig::default())
    }

    pub fn with_config(knowledge: Arc<KnowledgeBase>, config: AssessmentConfig) -> Self {
        Self { knowledge, config }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn assess(&self, query: &LocationQuery, today: NaiveDate) -> RiskAssessment {
        self.assess_with_live(query, today, None)
    }

    /// Score a destination. When `live` is present it replaces the seasonal window and
    /// city-tier lookups; region keywords apply either way.
    pub fn assess_with_live(
        &self,
        query: &LocationQuery,
        today: NaiveDate,
        live: Option<&LiveConditions>,
    ) -> RiskAssessment {
        if query.country().is_empty() {
            return Self::insufficient_data();
        }

        let signals =
            rules::collect_signals(&self.knowledge, &self.config, query, today.month(), live);
        let risk_score = signals
            .raw_score()
            .clamp(self.config.min_score, self.config.max_score);
        let factors = derive_factors(&signals, risk_score, &self.config);

        debug!(
            country = query.country(),
            base = signals.base,
            seasonal = signals.seasonal,
            context = signals.context,
            risk_score,
            ?factors,
            "risk assessed"
        );

        RiskAssessment {
            risk_score,
            confidence: signals.confidence(),
            factors,
        }
    }

    /// Fixed result used when no country was supplied.
    pub fn insufficient_data() -> RiskAssessment {
        RiskAssessment {
            risk_score: 0.5,
            confidence: INSUFFICIENT_DATA_CONFIDENCE,
            factors: vec![RiskFactor::InsufficientData],
        }
    }
}
