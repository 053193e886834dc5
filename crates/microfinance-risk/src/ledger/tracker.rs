use super::domain::{InstallmentRecord, LoanStatus};
use chrono::NaiveDate;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("installment {0} does not exist on this loan")]
    UnknownInstallment(u32),
}

/// Result of recording a single payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub installment_number: u32,
    /// False when the installment had already been settled.
    pub newly_paid: bool,
    /// True once every installment on the loan is paid.
    pub loan_completed: bool,
}

/// A loan's status together with its installments, ordered by installment number.
///
/// Callers own the value; every transition mutates only this copy.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentLedger {
    status: LoanStatus,
    installments: Vec<InstallmentRecord>,
}

impl InstallmentLedger {
    pub fn new(status: LoanStatus, mut installments: Vec<InstallmentRecord>) -> Self {
        installments.sort_by_key(|installment| installment.installment_number);
        Self {
            status,
            installments,
        }
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn installments(&self) -> &[InstallmentRecord] {
        &self.installments
    }

    pub fn into_parts(self) -> (LoanStatus, Vec<InstallmentRecord>) {
        (self.status, self.installments)
    }

    pub fn overdue_count(&self) -> usize {
        self.installments
            .iter()
            .filter(|installment| installment.is_missed())
            .count()
    }

    pub fn paid_count(&self) -> usize {
        self.installments
            .iter()
            .filter(|installment| installment.paid)
            .count()
    }

    pub fn is_fully_paid(&self) -> bool {
        self.installments.iter().all(|installment| installment.paid)
    }

    /// Settle one installment. Re-paying keeps the original payment date.
    pub fn mark_paid(
        &mut self,
        installment_number: u32,
        paid_on: NaiveDate,
    ) -> Result<PaymentOutcome, LedgerError> {
        let installment = self
            .installments
            .iter_mut()
            .find(|installment| installment.installment_number == installment_number)
            .ok_or(LedgerError::UnknownInstallment(installment_number))?;

        let newly_paid = !installment.paid;
        if newly_paid {
            installment.paid = true;
            installment.paid_date = Some(paid_on);
        }
        installment.is_overdue = false;

        let loan_completed = self.is_fully_paid();
        if loan_completed {
            self.status = LoanStatus::Completed;
        }

        Ok(PaymentOutcome {
            installment_number,
            newly_paid,
            loan_completed,
        })
    }

    /// Settle every outstanding installment and close the loan.
    pub fn mark_all_paid(&mut self, paid_on: NaiveDate) -> usize {
        let mut updated = 0;
        for installment in self.installments.iter_mut().filter(|item| !item.paid) {
            installment.paid = true;
            installment.paid_date = Some(paid_on);
            installment.is_overdue = false;
            updated += 1;
        }
        self.status = LoanStatus::Completed;

        info!(updated, "loan closed with bulk payment");
        updated
    }

    /// Flag unpaid installments whose due date is strictly before `as_of`.
    pub fn refresh_overdue(&mut self, as_of: NaiveDate) -> usize {
        let mut flagged = 0;
        for installment in self
            .installments
            .iter_mut()
            .filter(|item| !item.paid && item.due_date < as_of)
        {
            installment.is_overdue = true;
            flagged += 1;
        }
        flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
    }

    fn ledger() -> InstallmentLedger {
        InstallmentLedger::new(
            LoanStatus::Active,
            vec![
                InstallmentRecord::unpaid(3, date(21), Some(500.0)),
                InstallmentRecord::unpaid(1, date(1), Some(500.0)),
                InstallmentRecord::unpaid(2, date(11), Some(500.0)),
            ],
        )
    }

    #[test]
    fn new_orders_installments_by_number() {
        let numbers: Vec<u32> = ledger()
            .installments()
            .iter()
            .map(|installment| installment.installment_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn refresh_overdue_only_flags_unpaid_past_due() {
        let mut ledger = ledger();
        ledger.mark_paid(1, date(2)).expect("installment exists");

        let flagged = ledger.refresh_overdue(date(21));

        assert_eq!(flagged, 1);
        assert_eq!(ledger.overdue_count(), 1);
        assert!(ledger.installments()[1].is_overdue);
        assert!(!ledger.installments()[2].is_overdue, "due today is not overdue");
    }

    #[test]
    fn paying_last_installment_completes_loan() {
        let mut ledger = ledger();
        ledger.refresh_overdue(date(25));
        assert_eq!(ledger.overdue_count(), 3);

        ledger.mark_paid(1, date(25)).expect("exists");
        ledger.mark_paid(2, date(25)).expect("exists");
        let outcome = ledger.mark_paid(3, date(26)).expect("exists");

        assert!(outcome.newly_paid);
        assert!(outcome.loan_completed);
        assert_eq!(ledger.status(), LoanStatus::Completed);
        assert_eq!(ledger.overdue_count(), 0);
        assert_eq!(ledger.installments()[2].paid_date, Some(date(26)));
    }

    #[test]
    fn repaying_keeps_original_payment_date() {
        let mut ledger = ledger();
        ledger.mark_paid(2, date(10)).expect("exists");
        let outcome = ledger.mark_paid(2, date(15)).expect("exists");

        assert!(!outcome.newly_paid);
        assert!(!outcome.loan_completed);
        assert_eq!(ledger.installments()[1].paid_date, Some(date(10)));
    }

    #[test]
    fn unknown_installment_is_reported() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.mark_paid(9, date(1)),
            Err(LedgerError::UnknownInstallment(9))
        );
    }

    #[test]
    fn bulk_payment_counts_only_outstanding_items() {
        let mut ledger = ledger();
        ledger.mark_paid(1, date(1)).expect("exists");

        let updated = ledger.mark_all_paid(date(20));

        assert_eq!(updated, 2);
        assert!(ledger.is_fully_paid());
        assert_eq!(ledger.paid_count(), 3);
        assert_eq!(ledger.status(), LoanStatus::Completed);
    }
}
