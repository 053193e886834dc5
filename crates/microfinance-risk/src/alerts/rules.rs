use super::domain::{AlertKind, AlertSeverity, LoanAlert};
use super::policy::AlertPolicy;
use crate::ledger::InstallmentRecord;
use std::cmp::Reverse;

fn alert(
    severity: AlertSeverity,
    kind: AlertKind,
    message: String,
    recommendation: &str,
) -> LoanAlert {
    LoanAlert {
        severity,
        kind,
        message,
        recommendation: recommendation.to_string(),
    }
}

pub(crate) fn missed_payment_count(installments: &[InstallmentRecord]) -> usize {
    installments
        .iter()
        .filter(|installment| installment.is_missed())
        .count()
}

/// Severity tiers for missed installments; at most one alert.
pub(crate) fn overdue_tier(missed: usize, policy: &AlertPolicy) -> Option<LoanAlert> {
    if missed >= policy.high_missed_threshold {
        Some(alert(
            AlertSeverity::High,
            AlertKind::MultipleMissedPayments,
            format!("{missed} installments are overdue. Immediate action required."),
            "Contact client immediately and consider restructuring the loan.",
        ))
    } else if missed >= policy.medium_missed_threshold {
        Some(alert(
            AlertSeverity::Medium,
            AlertKind::MissedPayments,
            format!("{missed} installments are overdue."),
            "Follow up with client and send reminder.",
        ))
    } else if missed == 1 {
        Some(alert(
            AlertSeverity::Low,
            AlertKind::SingleMissedPayment,
            "1 installment is overdue.".to_string(),
            "Send payment reminder to client.",
        ))
    } else if missed > 1 {
        // Only reachable when the medium threshold is raised above two.
        Some(alert(
            AlertSeverity::Low,
            AlertKind::MissedPayments,
            format!("{missed} installments are overdue."),
            "Send payment reminder to client.",
        ))
    } else {
        None
    }
}

/// Share of installments paid, once there is enough history and at least one payment.
pub(crate) fn payment_rate_degradation(
    installments: &[InstallmentRecord],
    policy: &AlertPolicy,
) -> Option<LoanAlert> {
    let total = installments.len();
    let paid = installments
        .iter()
        .filter(|installment| installment.paid)
        .count();
    if total <= policy.min_history_for_rate || paid == 0 {
        return None;
    }

    let payment_rate = paid as f64 / total as f64;
    if payment_rate >= policy.poor_payment_rate {
        return None;
    }

    let percent = (payment_rate * 100.0).floor() as u32;
    Some(alert(
        AlertSeverity::High,
        AlertKind::PoorPaymentHistory,
        format!("Only {percent}% of installments paid on time."),
        "Assess client's financial situation and consider intervention.",
    ))
}

/// Latest installments first: due date descending, then installment number descending.
pub(crate) fn most_recent(
    installments: &[InstallmentRecord],
    window: usize,
) -> Vec<&InstallmentRecord> {
    let mut ordered: Vec<&InstallmentRecord> = installments.iter().collect();
    ordered.sort_by_key(|installment| {
        (
            Reverse(installment.due_date),
            Reverse(installment.installment_number),
        )
    });
    ordered.truncate(window);
    ordered
}

pub(crate) fn recent_clustering(
    installments: &[InstallmentRecord],
    policy: &AlertPolicy,
) -> Option<LoanAlert> {
    let recent = most_recent(installments, policy.recent_window);
    let unpaid = recent.iter().filter(|installment| !installment.paid).count();
    if unpaid < policy.recent_unpaid_threshold {
        return None;
    }

    Some(alert(
        AlertSeverity::Medium,
        AlertKind::RecentPaymentIssues,
        "Multiple recent payments missed.".to_string(),
        "Investigate reason for recent payment issues.",
    ))
}
