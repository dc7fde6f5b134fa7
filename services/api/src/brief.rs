use crate::infra::{briefing_rng, load_knowledge};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use travel_safety::briefing::{
    AlertFilters, BriefingRequest, LocationQuery, SafetyBriefing, SafetyBriefingService,
};
use travel_safety::config::AppConfig;
use travel_safety::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct BriefArgs {
    /// Destination country
    #[arg(long)]
    pub(crate) country: String,
    /// Optional city or region within the country
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Briefing date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Leave weather alerts out of the briefing
    #[arg(long)]
    pub(crate) no_weather: bool,
    /// Leave travel advisories out of the briefing
    #[arg(long)]
    pub(crate) no_advisory: bool,
    /// Leave local incident reports out of the briefing
    #[arg(long)]
    pub(crate) no_incident: bool,
    /// Seed the random draws for a reproducible briefing
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// CSV of `country,base_risk` rows layered over the standard tables
    #[arg(long)]
    pub(crate) country_risk_csv: Option<PathBuf>,
    /// Print the briefing as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl BriefArgs {
    fn request(&self) -> BriefingRequest {
        BriefingRequest {
            location: LocationQuery::new(self.country.clone(), self.city.as_deref()),
            filters: AlertFilters {
                weather: !self.no_weather,
                advisory: !self.no_advisory,
                incident: !self.no_incident,
            },
        }
    }

    /// Midday UTC on the requested date, or the current instant.
    fn issued_at(&self) -> DateTime<Utc> {
        self.date
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_else(Utc::now)
    }
}

pub(crate) fn run_brief(args: BriefArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(seed) = args.seed {
        config.briefing.rng_seed = Some(seed);
    }
    if let Some(path) = args.country_risk_csv.clone() {
        config.briefing.country_risk_csv = Some(path);
    }

    let knowledge = load_knowledge(&config.briefing)?;
    let service = SafetyBriefingService::new(knowledge);
    let request = args.request();
    let issued_at = args.issued_at();
    let mut rng = briefing_rng(config.briefing.rng_seed);

    let briefing = service.brief(&request, issued_at, &mut rng);

    if args.json {
        match serde_json::to_string_pretty(&briefing) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Briefing payload unavailable: {err}"),
        }
    } else {
        print!(
            "{}",
            render_briefing(&request.location, issued_at.date_naive(), &briefing)
        );
    }

    Ok(())
}

pub(crate) fn render_briefing(
    location: &LocationQuery,
    date: NaiveDate,
    briefing: &SafetyBriefing,
) -> String {
    let mut out = String::new();
    let destination = match location.city() {
        Some(city) => format!("{city}, {}", location.country()),
        None if location.country().is_empty() => "unspecified destination".to_string(),
        None => location.country().to_string(),
    };

    let assessment = &briefing.risk_assessment;
    let _ = writeln!(out, "Safety briefing for {destination} ({date})");
    let _ = writeln!(
        out,
        "- Risk score {:.2} | confidence {:.0}%",
        assessment.risk_score,
        assessment.confidence * 100.0
    );
    if assessment.factors.is_empty() {
        let _ = writeln!(out, "- No elevated risk factors");
    } else {
        let _ = writeln!(out, "- Factors: {}", assessment.factor_labels().join(", "));
    }

    let _ = writeln!(out, "\nAlerts ({})", briefing.alerts.len());
    for alert in &briefing.alerts {
        let _ = writeln!(
            out,
            "  - [{}] {}: {}",
            alert.severity.label().to_uppercase(),
            alert.category.label(),
            alert.title
        );
        let _ = writeln!(out, "    {} ({})", alert.description, alert.source);
    }

    let _ = writeln!(out, "\nRecommendations");
    for tip in &briefing.recommendations {
        let _ = writeln!(out, "  - {tip}");
    }

    out
}
