use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use travel_safety::briefing::{BriefingRequest, LocationQuery, RiskAssessment, SafetyBriefing};

/// Body for the assessment-only endpoint. `date` pins the calendar month
/// used for seasonal lookups; it defaults to today (UTC).
#[derive(Debug, Deserialize)]
pub(crate) struct RiskRequest {
    #[serde(flatten)]
    pub(crate) location: LocationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RiskResponse {
    pub(crate) assessed_on: NaiveDate,
    pub(crate) target_alert_count: usize,
    pub(crate) risk_assessment: RiskAssessment,
}

pub(crate) fn briefing_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/alerts", axum::routing::post(alerts_endpoint))
        .route("/api/v1/risk", axum::routing::post(risk_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn alerts_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<BriefingRequest>,
) -> Json<SafetyBriefing> {
    let mut rng = state.rng();
    let briefing = state.briefings.brief(&request, Utc::now(), &mut rng);
    Json(briefing)
}

pub(crate) async fn risk_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<RiskRequest>,
) -> Json<RiskResponse> {
    let RiskRequest { location, date } = request;
    let assessed_on = date.unwrap_or_else(|| Utc::now().date_naive());
    let risk_assessment = state.briefings.assess(&location, assessed_on);

    Json(RiskResponse {
        assessed_on,
        target_alert_count: risk_assessment.target_alert_count(),
        risk_assessment,
    })
}
