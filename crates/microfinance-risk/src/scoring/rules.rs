use super::bands::ScoringBands;
use super::config::ScoringWeights;
use super::domain::{
    ClientProfile, CreditHistory, EmploymentStatus, FactorContribution, ScoringFactor,
};
use tracing::warn;

pub(crate) fn employment_sub_score(status: EmploymentStatus) -> f64 {
    match status {
        EmploymentStatus::Employed => 20.0,
        EmploymentStatus::SelfEmployed => 40.0,
        EmploymentStatus::Unemployed | EmploymentStatus::Unknown => 80.0,
    }
}

pub(crate) fn credit_history_sub_score(history: CreditHistory) -> f64 {
    match history {
        CreditHistory::Good => 15.0,
        CreditHistory::Average => 50.0,
        CreditHistory::Poor | CreditHistory::Unknown => 85.0,
    }
}

/// A ratio only exists for a non-zero requested amount against a positive income.
pub(crate) fn loan_to_income_ratio(loan_amount: Option<f64>, monthly_income: f64) -> Option<f64> {
    match loan_amount {
        Some(amount) if amount != 0.0 && monthly_income > 0.0 => Some(amount / monthly_income),
        _ => None,
    }
}

fn contribution(
    factor: ScoringFactor,
    sub_score: f64,
    weight: f64,
    notes: String,
) -> FactorContribution {
    FactorContribution {
        factor,
        sub_score,
        weight,
        weighted: sub_score * weight,
        notes,
    }
}

pub(crate) fn score_profile(
    profile: &ClientProfile,
    loan_amount: Option<f64>,
    weights: &ScoringWeights,
    bands: &ScoringBands,
) -> Vec<FactorContribution> {
    let mut components = Vec::with_capacity(5);

    let income = profile.monthly_income;
    components.push(contribution(
        ScoringFactor::Income,
        bands.income.lookup(income),
        weights.income,
        format!("monthly income {income:.2}"),
    ));

    if profile.employment_status == EmploymentStatus::Unknown {
        warn!("unrecognized employment status, scoring at the riskiest band");
    }
    components.push(contribution(
        ScoringFactor::Employment,
        employment_sub_score(profile.employment_status),
        weights.employment,
        format!("employment status {}", profile.employment_status.label()),
    ));

    components.push(contribution(
        ScoringFactor::ExistingLoans,
        bands.existing_loans.lookup(f64::from(profile.existing_loans)),
        weights.existing_loans,
        format!("{} existing loan(s)", profile.existing_loans),
    ));

    if profile.credit_history == CreditHistory::Unknown {
        warn!("unrecognized credit history, scoring at the riskiest band");
    }
    components.push(contribution(
        ScoringFactor::CreditHistory,
        credit_history_sub_score(profile.credit_history),
        weights.credit_history,
        format!("credit history {}", profile.credit_history.label()),
    ));

    let lti = match loan_to_income_ratio(loan_amount, income) {
        Some(ratio) => contribution(
            ScoringFactor::LoanToIncome,
            bands.loan_to_income.lookup(ratio),
            weights.loan_to_income,
            format!("loan-to-income ratio {ratio:.2}"),
        ),
        None => contribution(
            ScoringFactor::LoanToIncome,
            bands.loan_to_income_default,
            weights.loan_to_income,
            "no loan-to-income ratio available, default band applied".to_string(),
        ),
    };
    components.push(lti);

    components
}
