use super::config::AssessmentConfig;
use super::rules::RiskSignals;
use crate::briefing::domain::RiskFactor;

/// Derive the factor list in its fixed evaluation order. Downstream components
/// branch on these names, never on the raw signal values.
pub(crate) fn derive_factors(
    signals: &RiskSignals,
    score: f64,
    config: &AssessmentConfig,
) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if signals.base > config.country_advisory_threshold {
        factors.push(RiskFactor::GeneralCountryAdvisory);
    }

    if signals.seasonal > config.seasonal_threshold {
        factors.push(RiskFactor::SeasonalWeatherConditions);
    }

    if signals.context > config.context_threshold {
        factors.push(RiskFactor::SpecificLocationRisks);
    }

    if factors.is_empty() && score > config.elevated_risk_threshold {
        factors.push(RiskFactor::CombinedRiskFactors);
    }

    factors
}
