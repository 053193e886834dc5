use crate::scoring::{ScoringConfigError, ScoringWeights};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the risk engine and its operator tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringWeights,
}

const WEIGHT_VARS: [&str; 5] = [
    "RISK_WEIGHT_INCOME",
    "RISK_WEIGHT_EMPLOYMENT",
    "RISK_WEIGHT_EXISTING_LOANS",
    "RISK_WEIGHT_CREDIT_HISTORY",
    "RISK_WEIGHT_LOAN_TO_INCOME",
];

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = LogFormat::from_str(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        );

        let defaults = ScoringWeights::default();
        let scoring = ScoringWeights {
            income: weight_override(WEIGHT_VARS[0], defaults.income)?,
            employment: weight_override(WEIGHT_VARS[1], defaults.employment)?,
            existing_loans: weight_override(WEIGHT_VARS[2], defaults.existing_loans)?,
            credit_history: weight_override(WEIGHT_VARS[3], defaults.credit_history)?,
            loan_to_income: weight_override(WEIGHT_VARS[4], defaults.loan_to_income)?,
        };
        scoring.validate()?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level, format },
            scoring,
        })
    }
}

fn weight_override(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidWeight {
                    variable: var,
                    value: raw,
                })
        }
        _ => Ok(default),
    }
}

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn from_str(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { variable: &'static str, value: String },
    Weights(ScoringConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { variable, value } => {
                write!(f, "{variable} must be a decimal number, got '{value}'")
            }
            ConfigError::Weights(err) => write!(f, "scoring weights rejected: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeight { .. } => None,
            ConfigError::Weights(err) => Some(err),
        }
    }
}

impl From<ScoringConfigError> for ConfigError {
    fn from(value: ScoringConfigError) -> Self {
        Self::Weights(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOG_FORMAT");
        for var in WEIGHT_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.format, LogFormat::Compact);
        assert_eq!(config.scoring, ScoringWeights::default());
    }

    #[test]
    fn load_applies_weight_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("APP_LOG_FORMAT", "JSON");
        env::set_var("RISK_WEIGHT_INCOME", "0.30");
        env::set_var("RISK_WEIGHT_LOAN_TO_INCOME", "0.05");
        let config = AppConfig::load().expect("rebalanced weights load");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.format, LogFormat::Json);
        assert_eq!(config.scoring.income, 0.30);
        assert_eq!(config.scoring.loan_to_income, 0.05);
    }

    #[test]
    fn load_rejects_unparseable_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_WEIGHT_EMPLOYMENT", "heavy");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidWeight { variable, value }) => {
                assert_eq!(variable, "RISK_WEIGHT_EMPLOYMENT");
                assert_eq!(value, "heavy");
            }
            other => panic!("expected invalid weight, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_weights_that_do_not_sum_to_one() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_WEIGHT_INCOME", "0.9");
        let result = AppConfig::load();
        reset_env();

        assert!(matches!(result, Err(ConfigError::Weights(_))));
    }
}
