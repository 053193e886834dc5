use crate::scoring::RiskLevel;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    pub total: usize,
    pub risk_distribution: RiskDistribution,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoanCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub defaulted: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyStats {
    pub year: i32,
    pub disbursed: f64,
    pub expected: f64,
    pub collected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStats {
    pub total_disbursed: f64,
    pub total_expected: f64,
    pub total_collected: f64,
    /// Collected over expected, as a percentage; 0 when nothing is expected.
    pub collection_rate: f64,
    pub yearly: YearlyStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertStats {
    pub overdue_installments: usize,
}

/// Portfolio-wide dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub clients: ClientStats,
    pub loans: LoanCounts,
    pub financial: FinancialStats,
    pub alerts: AlertStats,
    pub loan_types: BTreeMap<String, usize>,
}

/// An active loan with at least one overdue installment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverdueWatchEntry {
    pub loan_id: u64,
    pub client_id: u64,
    pub client_name: String,
    pub overdue_count: usize,
    pub loan_amount: f64,
    pub risk_level: Option<RiskLevel>,
}
