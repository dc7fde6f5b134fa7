use crate::brief::{run_brief, BriefArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use travel_safety::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Travel Safety Briefing",
    about = "Score destination risk and produce travel safety briefings over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a safety briefing for one destination
    Brief(BriefArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed every briefing's random draws for reproducible responses
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// CSV of `country,base_risk` rows layered over the standard tables
    #[arg(long)]
    pub(crate) country_risk_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Brief(args) => run_brief(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["travel-safety-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn brief_flags_parse() {
        let cli = Cli::try_parse_from([
            "travel-safety-api",
            "brief",
            "--country",
            "India",
            "--city",
            "Mumbai",
            "--no-incident",
            "--seed",
            "7",
            "--date",
            "2025-06-15",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Brief(args)) => {
                assert_eq!(args.country, "India");
                assert_eq!(args.city.as_deref(), Some("Mumbai"));
                assert!(args.no_incident);
                assert!(!args.no_weather);
                assert_eq!(args.seed, Some(7));
                assert!(args.json);
            }
            other => panic!("expected brief command, got {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from([
            "travel-safety-api",
            "serve",
            "--port",
            "8080",
            "--country-risk-csv",
            "risks.csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.country_risk_csv, Some(PathBuf::from("risks.csv")));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
