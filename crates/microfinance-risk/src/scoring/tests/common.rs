use crate::scoring::{ClientProfile, CreditHistory, EmploymentStatus, RiskScorer};

pub(super) fn scorer() -> RiskScorer {
    RiskScorer::default()
}

pub(super) fn profile(
    monthly_income: f64,
    employment_status: EmploymentStatus,
    existing_loans: u32,
    credit_history: CreditHistory,
) -> ClientProfile {
    ClientProfile {
        monthly_income,
        employment_status,
        existing_loans,
        credit_history,
    }
}

/// Salaried, debt-free, good history: 16.25 without a loan-to-income ratio.
pub(super) fn strong_profile() -> ClientProfile {
    profile(60_000.0, EmploymentStatus::Employed, 0, CreditHistory::Good)
}

/// Mid income, self-employed, one loan, average history: 43.00 without a ratio.
pub(super) fn moderate_profile() -> ClientProfile {
    profile(
        25_000.0,
        EmploymentStatus::SelfEmployed,
        1,
        CreditHistory::Average,
    )
}

/// Low income, unrecognized categories, three loans: 81.75 without a ratio.
pub(super) fn weak_profile() -> ClientProfile {
    profile(5_000.0, EmploymentStatus::Unknown, 3, CreditHistory::Unknown)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
