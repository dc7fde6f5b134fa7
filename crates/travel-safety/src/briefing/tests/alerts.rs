use super::common::*;
use crate::briefing::alerts::AlertGenerator;
use crate::briefing::assessment::RiskAssessmentEngine;
use crate::briefing::domain::{
    Alert, AlertCategory, AlertFilters, AlertSeverity, LocationQuery, RiskAssessment, RiskFactor,
};

fn generate(query: &LocationQuery, filters: AlertFilters, month: u32, seed: u64) -> Vec<Alert> {
    let knowledge = standard();
    let assessment = RiskAssessmentEngine::new(knowledge.clone()).assess(query, date(2025, month, 5));
    AlertGenerator::new(knowledge).generate(
        query,
        &filters,
        &assessment,
        at(2025, month, 5),
        &mut rng(seed),
    )
}

fn of_category(alerts: &[Alert], category: AlertCategory) -> Vec<&Alert> {
    alerts
        .iter()
        .filter(|alert| alert.category == category)
        .collect()
}

#[test]
fn extreme_risk_country_gets_dedicated_warning() {
    let alerts = generate(&country("Afghanistan"), AlertFilters::default(), 3, 5);

    let warning = alerts
        .iter()
        .find(|alert| alert.title == "Extreme Risk Warning")
        .expect("extreme risk warning present");
    assert_eq!(warning.severity, AlertSeverity::High);
    assert_eq!(warning.category, AlertCategory::Advisory);
    assert!(warning.description.contains("Afghanistan"));
}

#[test]
fn advisory_severity_follows_score_bands() {
    let high = generate(&country("Ukraine"), AlertFilters::only(AlertCategory::Advisory), 3, 1);
    assert_eq!(high[0].severity, AlertSeverity::High);
    assert_eq!(high[0].title, "Travel Advisory for Ukraine");

    let medium = generate(&country("India"), AlertFilters::only(AlertCategory::Advisory), 3, 1);
    assert_eq!(medium[0].severity, AlertSeverity::Medium);
    assert!(medium[0].description.contains("increased caution"));

    let low = generate(&country("Japan"), AlertFilters::only(AlertCategory::Advisory), 3, 1);
    assert_eq!(low[0].severity, AlertSeverity::Low);
    assert!(low[0].description.contains("normal precautions"));
}

#[test]
fn high_crime_city_adds_high_severity_advisory() {
    let alerts = generate(
        &city("Venezuela", "Caracas"),
        AlertFilters::only(AlertCategory::Advisory),
        3,
        9,
    );

    assert!(titles(&alerts).contains(&"High Crime Area: Caracas"));
}

#[test]
fn calm_weather_update_without_seasonal_factor() {
    let alerts = generate(&city("Japan", "Kyoto"), AlertFilters::only(AlertCategory::Weather), 4, 2);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "Weather Update for Kyoto");
    assert_eq!(alerts[0].severity, AlertSeverity::Low);
}

#[test]
fn one_weather_alert_per_templated_hazard() {
    let alerts = generate(&country("India"), AlertFilters::only(AlertCategory::Weather), 6, 4);

    assert_eq!(
        titles(&alerts),
        vec!["Monsoon Rains in India", "Extreme Heat Advisory for India"]
    );
}

#[test]
fn generic_weather_alert_when_hazards_lack_templates() {
    let knowledge = standard();
    let query = country("Indonesia");
    let assessment = RiskAssessment {
        risk_score: 0.5,
        confidence: 0.7,
        factors: vec![RiskFactor::SeasonalWeatherConditions],
    };

    let alerts = AlertGenerator::new(knowledge).generate(
        &query,
        &AlertFilters::only(AlertCategory::Weather),
        &assessment,
        at(2025, 1, 5),
        &mut rng(8),
    );

    assert_eq!(titles(&alerts), vec!["Weather Alert for Indonesia"]);
}

#[test]
fn disabled_categories_are_skipped() {
    let filters = AlertFilters {
        weather: false,
        advisory: true,
        incident: false,
    };
    let alerts = generate(&city("Mexico", "Tijuana"), filters, 9, 12);

    assert!(!alerts.is_empty());
    assert!(alerts
        .iter()
        .all(|alert| alert.category == AlertCategory::Advisory));
}

#[test]
fn elevated_score_draws_between_one_and_three_incidents() {
    for seed in 0..16 {
        let alerts = generate(&country("Ukraine"), AlertFilters::default(), 3, seed);
        let incidents = of_category(&alerts, AlertCategory::Incident);

        assert!((1..=3).contains(&incidents.len()), "seed {seed}");
        assert!(incidents
            .iter()
            .all(|alert| alert.severity == AlertSeverity::Medium));
    }
}

#[test]
fn calm_destinations_sometimes_report_a_minor_event() {
    let counts: Vec<usize> = (0..32)
        .map(|seed| {
            let alerts = generate(&country("Japan"), AlertFilters::default(), 4, seed);
            of_category(&alerts, AlertCategory::Incident).len()
        })
        .collect();

    assert!(counts.iter().all(|count| *count <= 1));
    assert!(counts.contains(&0));
    assert!(counts.contains(&1));
}

#[test]
fn alerts_carry_source_timestamp_and_rendered_text() {
    let alerts = generate(&city("Mexico", "Acapulco"), AlertFilters::default(), 9, 21);
    let issued_at = at(2025, 9, 5);

    for alert in &alerts {
        assert_eq!(alert.issued_at, issued_at);
        assert!(!alert.source.is_empty());
        assert!(!alert.title.contains("{place}"));
        assert!(!alert.description.contains("{place}"));
    }
    let weather = of_category(&alerts, AlertCategory::Weather);
    assert!(weather
        .iter()
        .all(|alert| alert.source == "Regional Weather Service"));
}

#[test]
fn generation_is_reproducible_with_a_seed() {
    let query = city("Brazil", "Rio de Janeiro");
    assert_eq!(
        generate(&query, AlertFilters::default(), 2, 99),
        generate(&query, AlertFilters::default(), 2, 99)
    );
}
