use super::domain::LoanSnapshot;
use super::policy::AlertPolicy;
use crate::rounding::round2;

/// `min(100, (score * weight + overdue * penalty) * status_factor)`, rounded to two decimals.
pub(crate) fn default_probability(
    loan: &LoanSnapshot,
    client_risk_score: f64,
    overdue_count: usize,
    policy: &AlertPolicy,
) -> f64 {
    let status_factor = if loan.status.is_active() {
        1.0
    } else {
        policy.inactive_status_factor
    };
    let base = client_risk_score * policy.risk_score_weight;
    let penalty = overdue_count as f64 * policy.overdue_penalty;

    round2(((base + penalty) * status_factor).min(100.0))
}
