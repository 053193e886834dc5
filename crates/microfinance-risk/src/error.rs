use crate::config::ConfigError;
use crate::ledger::{LedgerError, LedgerImportError};
use crate::telemetry::TelemetryError;
use std::fmt;

/// Misuse of a numeric input that the engine cannot turn into a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl RiskError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Risk(RiskError),
    Ledger(LedgerError),
    Import(LedgerImportError),
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Risk(err) => write!(f, "risk engine error: {}", err),
            AppError::Ledger(err) => write!(f, "ledger error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Risk(err) => Some(err),
            AppError::Ledger(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RiskError> for AppError {
    fn from(value: RiskError) -> Self {
        Self::Risk(value)
    }
}

impl From<LedgerError> for AppError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

impl From<LedgerImportError> for AppError {
    fn from(value: LedgerImportError) -> Self {
        Self::Import(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn app_error_exposes_source_and_context() {
        let err = AppError::from(RiskError::invalid("duration_months", "must be greater than zero"));
        assert_eq!(
            err.to_string(),
            "risk engine error: invalid argument `duration_months`: must be greater than zero"
        );
        assert!(err.source().is_some());
    }
}
