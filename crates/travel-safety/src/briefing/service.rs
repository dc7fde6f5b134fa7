use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use tracing::{info, warn};

use super::alerts::{select_alerts, AlertGenerator};
use super::assessment::{AssessmentConfig, RiskAssessmentEngine};
use super::domain::{BriefingRequest, LocationQuery, RiskAssessment, SafetyBriefing};
use super::knowledge::KnowledgeBase;
use super::live::{LiveConditions, LiveConditionsProvider};
use super::recommendations::{RecommendationEngine, TipPools};

/// Service composing assessment, recommendations, alert generation and selection.
pub struct SafetyBriefingService {
    assessor: RiskAssessmentEngine,
    recommender: RecommendationEngine,
    generator: AlertGenerator,
    live: Option<Arc<dyn LiveConditionsProvider>>,
}

impl SafetyBriefingService {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_components(knowledge, AssessmentConfig::default(), TipPools::standard())
    }

    pub fn with_components(
        knowledge: Arc<KnowledgeBase>,
        config: AssessmentConfig,
        pools: TipPools,
    ) -> Self {
        Self {
            assessor: RiskAssessmentEngine::with_config(knowledge.clone(), config),
            recommender: RecommendationEngine::new(knowledge.clone(), pools),
            generator: AlertGenerator::new(knowledge),
            live: None,
        }
    }

    pub fn with_live_conditions(mut self, provider: Arc<dyn LiveConditionsProvider>) -> Self {
        self.live = Some(provider);
        self
    }

    pub fn assessor(&self) -> &RiskAssessmentEngine {
        &self.assessor
    }

    pub fn recommender(&self) -> &RecommendationEngine {
        &self.recommender
    }

    pub fn generator(&self) -> &AlertGenerator {
        &self.generator
    }

    /// Assess a destination, folding in live conditions when a provider answers.
    pub fn assess(&self, query: &LocationQuery, today: NaiveDate) -> RiskAssessment {
        let live = self.live_conditions(query);
        self.assessor.assess_with_live(query, today, live.as_ref())
    }

    /// Run the full pipeline for one request.
    pub fn brief<R: Rng + ?Sized>(
        &self,
        request: &BriefingRequest,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> SafetyBriefing {
        let query = &request.location;
        let today = now.date_naive();

        let risk_assessment = self.assess(query, today);
        let recommendations = self
            .recommender
            .recommend(query, &risk_assessment, today, rng);
        let candidates = self
            .generator
            .generate(query, &request.filters, &risk_assessment, now, rng);
        let candidate_count = candidates.len();
        let alerts = select_alerts(candidates, &risk_assessment);

        info!(
            country = query.country(),
            city = query.city().unwrap_or(""),
            risk_score = risk_assessment.risk_score,
            confidence = risk_assessment.confidence,
            candidates = candidate_count,
            alerts = alerts.len(),
            recommendations = recommendations.len(),
            "safety briefing prepared"
        );

        SafetyBriefing {
            risk_assessment,
            alerts,
            recommendations,
        }
    }

    /// Live data is advisory: a missing provider, a missing city or a failed fetch
    /// all mean "no live data".
    fn live_conditions(&self, query: &LocationQuery) -> Option<LiveConditions> {
        let provider = self.live.as_ref()?;
        let city = query.city()?;
        match provider.fetch(city) {
            Ok(conditions) => Some(conditions),
            Err(err) => {
                warn!(city, error = %err, "live conditions unavailable; using static knowledge");
                None
            }
        }
    }
}
