use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use travel_safety::briefing::{KnowledgeBase, SafetyBriefingService};
use travel_safety::config::BriefingConfig;
use travel_safety::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) briefings: Arc<SafetyBriefingService>,
    pub(crate) rng_seed: Option<u64>,
}

impl AppState {
    pub(crate) fn rng(&self) -> StdRng {
        briefing_rng(self.rng_seed)
    }
}

/// Fresh generator per briefing: seeded when configured, entropy otherwise.
pub(crate) fn briefing_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn load_knowledge(config: &BriefingConfig) -> Result<Arc<KnowledgeBase>, AppError> {
    let knowledge = config.knowledge_base()?;
    info!(
        countries = knowledge.country_count(),
        csv = ?config.country_risk_csv,
        "knowledge base loaded"
    );
    Ok(Arc::new(knowledge))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
