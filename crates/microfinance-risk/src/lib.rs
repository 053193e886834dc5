//! Credit risk scoring, loan-term recommendation, and default alerting for
//! microfinance loan books.
//!
//! Every engine entry point is a pure function of its arguments. Callers own
//! persistence and transport; this crate only turns client profiles and
//! installment histories into scores, recommendations, and alerts.

pub mod alerts;
pub mod config;
pub mod error;
pub mod ledger;
pub mod portfolio;
pub mod scoring;
pub mod telemetry;

mod rounding;

pub use alerts::{
    AlertKind, AlertPolicy, AlertSeverity, DefaultAlertSystem, InstallmentRecord, LoanAlert,
    LoanRiskReport, LoanSnapshot, LoanStatus,
};
pub use error::{AppError, RiskError};
pub use portfolio::{overdue_watchlist, DashboardStats, PortfolioLoan};
pub use ledger::{monthly_installment, InstallmentLedger, LoanTerms, RepaymentSchedule};
pub use scoring::{
    ApprovalRecommendation, ClientProfile, CreditHistory, EmploymentStatus, LoanTermSuggestion,
    RiskAssessment, RiskLevel, RiskScorer, ScoringWeights,
};
