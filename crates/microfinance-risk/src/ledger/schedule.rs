use super::amortize;
use super::domain::InstallmentRecord;
use crate::error::RiskError;
use crate::rounding::round2;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Installments fall due at fixed 30-day steps after disbursement.
pub const SCHEDULE_INTERVAL_DAYS: i64 = 30;

/// Agreed terms of a disbursed loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_interest_rate: f64,
    pub duration_months: u32,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub monthly_installment: f64,
    pub total_repayable: f64,
    pub installments: Vec<InstallmentRecord>,
}

impl RepaymentSchedule {
    pub fn generate(terms: &LoanTerms) -> Result<Self, RiskError> {
        if terms.duration_months == 0 {
            return Err(RiskError::invalid(
                "duration_months",
                "must be greater than zero",
            ));
        }
        if !terms.annual_interest_rate.is_finite() || terms.annual_interest_rate < 0.0 {
            return Err(RiskError::invalid(
                "annual_interest_rate",
                format!(
                    "must be a finite non-negative percentage, got {}",
                    terms.annual_interest_rate
                ),
            ));
        }
        if !terms.principal.is_finite() {
            return Err(RiskError::invalid("principal", "must be finite"));
        }

        let installment = amortize(
            terms.principal,
            terms.annual_interest_rate,
            terms.duration_months,
        );
        let amount = round2(installment);

        let installments = (1..=terms.duration_months)
            .map(|number| {
                let offset = Duration::days(SCHEDULE_INTERVAL_DAYS * i64::from(number));
                terms
                    .start_date
                    .checked_add_signed(offset)
                    .map(|due_date| InstallmentRecord::unpaid(number, due_date, Some(amount)))
                    .ok_or_else(|| {
                        RiskError::invalid("start_date", "schedule runs past the supported calendar")
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            installments = installments.len(),
            monthly_installment = amount,
            "repayment schedule generated"
        );

        Ok(Self {
            monthly_installment: amount,
            total_repayable: round2(installment * f64::from(terms.duration_months)),
            installments,
        })
    }
}
