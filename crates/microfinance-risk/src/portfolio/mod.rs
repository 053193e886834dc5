//! Portfolio-level analytics over a book of loans.

mod stats;
mod views;

pub use stats::overdue_watchlist;
pub use views::{
    AlertStats, ClientStats, DashboardStats, FinancialStats, LoanCounts, OverdueWatchEntry,
    RiskDistribution, YearlyStats,
};

use crate::ledger::{InstallmentRecord, LoanStatus};
use crate::scoring::RiskLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A loan with the client details the dashboard and watchlist report on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLoan {
    pub loan_id: u64,
    pub client_id: u64,
    pub client_name: String,
    #[serde(default)]
    pub client_risk_level: Option<RiskLevel>,
    pub loan_type: String,
    pub loan_amount: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub status: LoanStatus,
    #[serde(default)]
    pub installments: Vec<InstallmentRecord>,
}

impl PortfolioLoan {
    pub fn overdue_count(&self) -> usize {
        self.installments
            .iter()
            .filter(|installment| installment.is_missed())
            .count()
    }
}
