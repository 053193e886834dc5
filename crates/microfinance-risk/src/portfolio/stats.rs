use super::views::{
    AlertStats, ClientStats, DashboardStats, FinancialStats, LoanCounts, OverdueWatchEntry,
    RiskDistribution, YearlyStats,
};
use super::PortfolioLoan;
use crate::ledger::{InstallmentRecord, LoanStatus};
use crate::rounding::round2;
use crate::scoring::RiskLevel;
use chrono::Datelike;
use std::collections::BTreeMap;
use tracing::debug;

fn amount(installment: &InstallmentRecord) -> f64 {
    installment.amount.unwrap_or(0.0)
}

fn risk_distribution(client_levels: &[Option<RiskLevel>]) -> RiskDistribution {
    client_levels
        .iter()
        .flatten()
        .fold(RiskDistribution::default(), |mut acc, level| {
            match level {
                RiskLevel::Low => acc.low += 1,
                RiskLevel::Medium => acc.medium += 1,
                RiskLevel::High => acc.high += 1,
            }
            acc
        })
}

fn loan_counts(loans: &[PortfolioLoan]) -> LoanCounts {
    let count = |status: LoanStatus| loans.iter().filter(|loan| loan.status == status).count();
    LoanCounts {
        total: loans.len(),
        active: count(LoanStatus::Active),
        completed: count(LoanStatus::Completed),
        defaulted: count(LoanStatus::Defaulted),
    }
}

#[derive(Default)]
struct Totals {
    disbursed: f64,
    expected: f64,
    collected: f64,
    yearly_disbursed: f64,
    yearly_expected: f64,
    yearly_collected: f64,
}

impl Totals {
    fn add(&mut self, loan: &PortfolioLoan, year: i32) {
        self.disbursed += loan.loan_amount;
        self.expected += loan.installments.iter().map(amount).sum::<f64>();
        self.collected += loan
            .installments
            .iter()
            .filter(|installment| installment.paid)
            .map(amount)
            .sum::<f64>();

        if loan.start_date.year() != year {
            return;
        }
        self.yearly_disbursed += loan.loan_amount;
        self.yearly_expected += loan
            .installments
            .iter()
            .filter(|installment| installment.due_date.year() == year)
            .map(amount)
            .sum::<f64>();
        self.yearly_collected += loan
            .installments
            .iter()
            .filter(|installment| {
                installment.paid
                    && installment
                        .paid_date
                        .is_some_and(|paid_on| paid_on.year() == year)
            })
            .map(amount)
            .sum::<f64>();
    }

    fn into_stats(self, year: i32) -> FinancialStats {
        let collection_rate = if self.expected > 0.0 {
            round2(self.collected / self.expected * 100.0)
        } else {
            0.0
        };
        FinancialStats {
            total_disbursed: round2(self.disbursed),
            total_expected: round2(self.expected),
            total_collected: round2(self.collected),
            collection_rate,
            yearly: YearlyStats {
                year,
                disbursed: round2(self.yearly_disbursed),
                expected: round2(self.yearly_expected),
                collected: round2(self.yearly_collected),
            },
        }
    }
}

impl DashboardStats {
    /// Aggregates a loan book. Yearly figures only cover loans that started in `year`.
    pub fn compute(client_levels: &[Option<RiskLevel>], loans: &[PortfolioLoan], year: i32) -> Self {
        let mut totals = Totals::default();
        let mut loan_types: BTreeMap<String, usize> = BTreeMap::new();
        for loan in loans {
            totals.add(loan, year);
            *loan_types.entry(loan.loan_type.clone()).or_default() += 1;
        }

        let overdue_installments = loans.iter().map(PortfolioLoan::overdue_count).sum();
        debug!(
            clients = client_levels.len(),
            loans = loans.len(),
            overdue_installments,
            "dashboard statistics computed"
        );

        DashboardStats {
            clients: ClientStats {
                total: client_levels.len(),
                risk_distribution: risk_distribution(client_levels),
            },
            loans: loan_counts(loans),
            financial: totals.into_stats(year),
            alerts: AlertStats {
                overdue_installments,
            },
            loan_types,
        }
    }
}

/// Active loans carrying overdue unpaid installments, in input order.
pub fn overdue_watchlist(loans: &[PortfolioLoan]) -> Vec<OverdueWatchEntry> {
    loans
        .iter()
        .filter(|loan| loan.status.is_active())
        .filter_map(|loan| {
            let overdue_count = loan.overdue_count();
            (overdue_count > 0).then(|| OverdueWatchEntry {
                loan_id: loan.loan_id,
                client_id: loan.client_id,
                client_name: loan.client_name.clone(),
                overdue_count,
                loan_amount: loan.loan_amount,
                risk_level: loan.client_risk_level,
            })
        })
        .collect()
}
