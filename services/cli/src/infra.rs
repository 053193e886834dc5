use chrono::NaiveDate;
use clap::ValueEnum;
use microfinance_risk::config::AppConfig;
use microfinance_risk::error::AppError;
use microfinance_risk::telemetry;
use microfinance_risk::LoanStatus;
use serde::Serialize;
use tracing::debug;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Load configuration and install the subscriber before any engine call.
pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");
    Ok(config)
}

/// Pretty JSON, or the caller's text rendering.
pub(crate) fn emit<T, F>(format: OutputFormat, value: &T, render_text: F) -> Result<(), AppError>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => render_text(value),
    }
    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_status(raw: &str) -> Result<LoanStatus, String> {
    if raw.trim().is_empty() {
        return Err("loan status must not be empty".to_string());
    }
    Ok(LoanStatus::from(raw))
}
