//! Severity quota selection.
//!
//! Every high-severity alert is kept, even past the target count. Remaining capacity
//! is filled from medium, then low, in pool order.

use crate::briefing::domain::{Alert, AlertSeverity, RiskAssessment};
use tracing::debug;

/// Reduce `pool` to the target count derived from `assessment`.
pub fn select_alerts(pool: Vec<Alert>, assessment: &RiskAssessment) -> Vec<Alert> {
    select_with_target(pool, assessment.target_alert_count())
}

pub fn select_with_target(pool: Vec<Alert>, target: usize) -> Vec<Alert> {
    if pool.len() <= target {
        return pool;
    }

    let mut high = Vec::new();
    let mut medium = Vec::new();
    let mut low = Vec::new();
    for alert in pool {
        match alert.severity {
            AlertSeverity::High => high.push(alert),
            AlertSeverity::Medium => medium.push(alert),
            AlertSeverity::Low => low.push(alert),
        }
    }

    let mut budget = target.saturating_sub(high.len());
    debug!(
        target,
        high = high.len(),
        medium = medium.len(),
        low = low.len(),
        budget,
        "selecting alerts by severity quota"
    );

    let mut selected = high;
    for tier in [medium, low] {
        let take = budget.min(tier.len());
        selected.extend(tier.into_iter().take(take));
        budget -= take;
    }

    selected
}
