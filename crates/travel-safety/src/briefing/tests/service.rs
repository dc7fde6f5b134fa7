use super::common::*;
use crate::briefing::domain::{
    AlertCategory, AlertFilters, AlertSeverity, BriefingRequest, LocationQuery, RiskFactor,
};
use crate::briefing::service::SafetyBriefingService;

fn request(query: LocationQuery) -> BriefingRequest {
    BriefingRequest {
        location: query,
        filters: AlertFilters::default(),
    }
}

#[test]
fn extreme_risk_briefing_keeps_every_high_alert() {
    let service = SafetyBriefingService::new(standard());

    let briefing = service.brief(
        &request(city("Afghanistan", "Kabul")),
        at(2025, 3, 1),
        &mut rng(17),
    );

    assert_eq!(briefing.risk_assessment.risk_score, 0.95);
    let titles = titles(&briefing.alerts);
    assert!(titles.contains(&"Extreme Risk Warning"));
    assert!(titles.contains(&"High Crime Area: Kabul"));
    assert!(titles.contains(&"Travel Advisory for Kabul"));
    assert!(briefing.alerts.len() <= 7);
}

#[test]
fn only_high_alerts_may_exceed_the_target() {
    let service = SafetyBriefingService::new(standard());

    for seed in 0..16 {
        let briefing = service.brief(&request(country("Ukraine")), at(2025, 3, 1), &mut rng(seed));
        let target = briefing.risk_assessment.target_alert_count();
        let highs = briefing
            .alerts
            .iter()
            .filter(|alert| alert.severity == AlertSeverity::High)
            .count();

        assert!(briefing.alerts.len() <= target.max(highs), "seed {seed}");
    }
}

#[test]
fn empty_country_still_produces_a_briefing() {
    let service = SafetyBriefingService::new(standard());

    let briefing = service.brief(&request(country("")), at(2025, 5, 1), &mut rng(3));

    assert_eq!(
        briefing.risk_assessment.factors,
        vec![RiskFactor::InsufficientData]
    );
    assert_eq!(briefing.recommendations.len(), 3);
}

#[test]
fn filters_flow_through_to_alerts() {
    let service = SafetyBriefingService::new(standard());
    let briefing = service.brief(
        &BriefingRequest {
            location: country("India"),
            filters: AlertFilters::only(AlertCategory::Weather),
        },
        at(2025, 6, 20),
        &mut rng(8),
    );

    assert!(!briefing.alerts.is_empty());
    assert!(briefing
        .alerts
        .iter()
        .all(|alert| alert.category == AlertCategory::Weather));
}

#[test]
fn seeded_briefings_are_identical() {
    let service = SafetyBriefingService::new(standard());
    let req = request(city("Brazil", "Rio de Janeiro"));
    let now = at(2025, 1, 9);

    assert_eq!(
        service.brief(&req, now, &mut rng(2024)),
        service.brief(&req, now, &mut rng(2024))
    );
}

#[test]
fn live_conditions_raise_confidence() {
    let provider = FixedLive::reporting(stormy_conditions());
    let service = SafetyBriefingService::new(standard()).with_live_conditions(provider.clone());

    let assessment = service.assess(&city("Mexico", "Mexico City"), date(2025, 1, 20));

    assert_eq!(provider.call_count(), 1);
    assert_close(assessment.confidence, 0.9);
    assert_close(assessment.risk_score, 0.85);
}

#[test]
fn failed_live_fetch_falls_back_to_static_knowledge() {
    let provider = FixedLive::failing();
    let service = SafetyBriefingService::new(standard()).with_live_conditions(provider.clone());
    let query = city("Mexico", "Mexico City");
    let today = date(2025, 1, 20);

    let assessment = service.assess(&query, today);

    assert_eq!(provider.call_count(), 1);
    assert_eq!(assessment, service.assessor().assess(&query, today));
}

#[test]
fn live_provider_is_not_consulted_without_a_city() {
    let provider = FixedLive::reporting(stormy_conditions());
    let service = SafetyBriefingService::new(standard()).with_live_conditions(provider.clone());

    let assessment = service.assess(&country("Mexico"), date(2025, 1, 20));

    assert_eq!(provider.call_count(), 0);
    assert_close(assessment.confidence, 0.7);
}
