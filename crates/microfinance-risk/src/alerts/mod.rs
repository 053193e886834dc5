//! Default-risk alerting over a loan's installment history.

mod domain;
mod policy;
mod probability;
mod rules;

pub use crate::ledger::{InstallmentRecord, LoanStatus};
pub use domain::{AlertKind, AlertSeverity, LoanAlert, LoanRiskReport, LoanSnapshot};
pub use policy::AlertPolicy;

use probability::default_probability;
use rules::{missed_payment_count, overdue_tier, payment_rate_degradation, recent_clustering};
use tracing::{info, warn};

/// Stateless alert engine applying an `AlertPolicy`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultAlertSystem {
    policy: AlertPolicy,
}

impl DefaultAlertSystem {
    pub fn new(policy: AlertPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    /// Every applicable alert: missed-payment tier, payment-rate degradation, then recency.
    pub fn check_default_risk(
        &self,
        _loan: &LoanSnapshot,
        installments: &[InstallmentRecord],
    ) -> Vec<LoanAlert> {
        let missed = missed_payment_count(installments);

        let alerts: Vec<LoanAlert> = [
            overdue_tier(missed, &self.policy),
            payment_rate_degradation(installments, &self.policy),
            recent_clustering(installments, &self.policy),
        ]
        .into_iter()
        .flatten()
        .collect();

        let high = alerts
            .iter()
            .filter(|alert| alert.severity == AlertSeverity::High)
            .count();
        if high > 0 {
            warn!(
                high,
                total = alerts.len(),
                missed,
                "loan raised high-severity default alerts"
            );
        }

        alerts
    }

    /// Estimated probability of default, 0-100.
    pub fn calculate_default_probability(
        &self,
        loan: &LoanSnapshot,
        client_risk_score: f64,
        overdue_count: usize,
    ) -> f64 {
        default_probability(loan, client_risk_score, overdue_count, &self.policy)
    }

    /// Alerts and default probability together. An unscored client is treated as a neutral 50.
    pub fn assess_loan(
        &self,
        loan: &LoanSnapshot,
        installments: &[InstallmentRecord],
        client_risk_score: Option<f64>,
    ) -> LoanRiskReport {
        let overdue_installments = missed_payment_count(installments);
        let risk_score = client_risk_score.unwrap_or(self.policy.fallback_client_risk_score);

        let report = LoanRiskReport {
            alerts: self.check_default_risk(loan, installments),
            default_probability: self.calculate_default_probability(
                loan,
                risk_score,
                overdue_installments,
            ),
            overdue_installments,
            total_installments: installments.len(),
        };

        info!(
            status = loan.status.label(),
            alerts = report.alerts.len(),
            default_probability = report.default_probability,
            "loan risk assessed"
        );
        report
    }
}
