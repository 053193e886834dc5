use crate::ledger::LoanStatus;
use serde::{Deserialize, Serialize};

/// The slice of a loan the alerting engine looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSnapshot {
    #[serde(default)]
    pub status: LoanStatus,
}

impl LoanSnapshot {
    pub fn new(status: LoanStatus) -> Self {
        Self { status }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            AlertSeverity::High => "High",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "Multiple Missed Payments")]
    MultipleMissedPayments,
    #[serde(rename = "Missed Payments")]
    MissedPayments,
    #[serde(rename = "Single Missed Payment")]
    SingleMissedPayment,
    #[serde(rename = "Poor Payment History")]
    PoorPaymentHistory,
    #[serde(rename = "Recent Payment Issues")]
    RecentPaymentIssues,
}

impl AlertKind {
    pub const fn label(self) -> &'static str {
        match self {
            AlertKind::MultipleMissedPayments => "Multiple Missed Payments",
            AlertKind::MissedPayments => "Missed Payments",
            AlertKind::SingleMissedPayment => "Single Missed Payment",
            AlertKind::PoorPaymentHistory => "Poor Payment History",
            AlertKind::RecentPaymentIssues => "Recent Payment Issues",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanAlert {
    pub severity: AlertSeverity,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub recommendation: String,
}

/// Everything a collections officer needs about one loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRiskReport {
    pub alerts: Vec<LoanAlert>,
    pub default_probability: f64,
    pub overdue_installments: usize,
    pub total_installments: usize,
}

impl LoanRiskReport {
    pub fn highest_severity(&self) -> Option<AlertSeverity> {
        self.alerts.iter().map(|alert| alert.severity).min()
    }
}
