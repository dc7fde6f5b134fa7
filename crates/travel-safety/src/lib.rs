pub mod briefing;
pub mod config;
pub mod error;
pub mod telemetry;
