use crate::cli::ServeArgs;
use crate::infra::{load_knowledge, AppState};
use crate::routes::briefing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use travel_safety::briefing::SafetyBriefingService;
use travel_safety::config::AppConfig;
use travel_safety::error::AppError;
use travel_safety::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(seed) = args.seed.take() {
        config.briefing.rng_seed = Some(seed);
    }
    if let Some(path) = args.country_risk_csv.take() {
        config.briefing.country_risk_csv = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let knowledge = load_knowledge(&config.briefing)?;
    let briefings = Arc::new(SafetyBriefingService::new(knowledge));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        briefings,
        rng_seed: config.briefing.rng_seed,
    };

    let app = briefing_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.briefing.rng_seed.is_some(),
        "travel safety service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
