//! Installment arithmetic, repayment schedules, and installment tracking.

mod domain;
mod import;
mod schedule;
mod tracker;

pub use domain::{InstallmentRecord, LoanStatus};
pub use import::{LedgerImportError, LedgerImporter};
pub use schedule::{LoanTerms, RepaymentSchedule, SCHEDULE_INTERVAL_DAYS};
pub use tracker::{InstallmentLedger, LedgerError, PaymentOutcome};

use crate::error::RiskError;

/// Simple-interest installment: `principal * (1 + rate/100 * months/12) / months`.
///
/// Callers must pass `duration_months >= 1`.
pub(crate) fn amortize(principal: f64, annual_rate_pct: f64, duration_months: u32) -> f64 {
    let months = f64::from(duration_months);
    principal * (1.0 + (annual_rate_pct / 100.0) * (months / 12.0)) / months
}

/// Unrounded monthly installment for a simple-interest loan.
pub fn monthly_installment(
    principal: f64,
    annual_rate_pct: f64,
    duration_months: u32,
) -> Result<f64, RiskError> {
    if duration_months == 0 {
        return Err(RiskError::invalid(
            "duration_months",
            "must be greater than zero",
        ));
    }
    Ok(amortize(principal, annual_rate_pct, duration_months))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installment_spreads_simple_interest_evenly() {
        let installment = monthly_installment(120_000.0, 12.0, 12).expect("valid duration");
        assert!((installment - 11_200.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_is_rejected() {
        match monthly_installment(10_000.0, 18.0, 0) {
            Err(RiskError::InvalidArgument { name, .. }) => assert_eq!(name, "duration_months"),
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }
}
