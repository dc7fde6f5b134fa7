use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::briefing::domain::{Alert, LocationQuery};
use crate::briefing::knowledge::{HazardWindow, KnowledgeBase, SeasonalWindow, WeatherHazard};
use crate::briefing::live::{
    CrimeLevel, LiveConditions, LiveConditionsError, LiveConditionsProvider, TrafficLevel,
    WeatherCondition,
};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn standard() -> Arc<KnowledgeBase> {
    Arc::new(KnowledgeBase::standard())
}

/// One hurricane-prone island and nothing else.
pub(super) fn island_knowledge() -> Arc<KnowledgeBase> {
    Arc::new(
        KnowledgeBase::empty()
            .with_country_risk("Cuba", 0.3)
            .with_seasonal_window(SeasonalWindow::new(
                "hurricane season",
                &[6, 7, 8, 9, 10, 11],
                &["Cuba"],
                0.1,
            ))
            .with_hazard_window(HazardWindow::new(
                WeatherHazard::Hurricane,
                &[6, 7, 8, 9, 10, 11],
                &["Cuba"],
            )),
    )
}

pub(super) fn country(name: &str) -> LocationQuery {
    LocationQuery::new(name, None)
}

pub(super) fn city(country: &str, city: &str) -> LocationQuery {
    LocationQuery::new(country, Some(city))
}

pub(super) fn titles(alerts: &[Alert]) -> Vec<&str> {
    alerts.iter().map(|alert| alert.title.as_str()).collect()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn stormy_conditions() -> LiveConditions {
    LiveConditions {
        weather: WeatherCondition::Storm,
        crime_level: CrimeLevel::High,
        traffic_level: TrafficLevel::Heavy,
        as_of: at(2025, 1, 15),
    }
}

/// Provider returning a fixed answer and counting calls.
pub(super) struct FixedLive {
    pub answer: Result<LiveConditions, fn() -> LiveConditionsError>,
    pub calls: AtomicUsize,
}

impl FixedLive {
    pub(super) fn reporting(conditions: LiveConditions) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(conditions),
            calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: Err(|| LiveConditionsError::Timeout),
            calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LiveConditionsProvider for FixedLive {
    fn fetch(&self, _city: &str) -> Result<LiveConditions, LiveConditionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Ok(conditions) => Ok(*conditions),
            Err(make_error) => Err(make_error()),
        }
    }
}
