const DEBT_SERVICE_CEILING_PCT: f64 = 35.0;
const LOAN_TO_INCOME_CEILING: f64 = 12.0;
const MULTI_LOAN_THRESHOLD: u32 = 2;

pub(crate) const AFFORDABILITY_WARNING: &str =
    "Installments exceed 35% of monthly income. Consider lowering loan amount.";
pub(crate) const LEVERAGE_WARNING: &str =
    "Loan-to-income ratio is higher than typical microfinance thresholds.";
pub(crate) const MULTI_LOAN_WARNING: &str =
    "Client already services multiple loans. Verify repayment discipline.";
pub(crate) const PROCEED_NOTE: &str =
    "Risk level is under control. Proceed with standard monitoring cadence.";

/// Every applicable warning, in a fixed order; a single proceed note when none apply.
pub(crate) fn generate_insights(
    debt_service_ratio: Option<f64>,
    loan_to_income_ratio: Option<f64>,
    existing_loans: u32,
) -> Vec<String> {
    let mut insights = Vec::new();

    if debt_service_ratio.is_some_and(|ratio| ratio > DEBT_SERVICE_CEILING_PCT) {
        insights.push(AFFORDABILITY_WARNING.to_string());
    }

    if loan_to_income_ratio.is_some_and(|ratio| ratio > LOAN_TO_INCOME_CEILING) {
        insights.push(LEVERAGE_WARNING.to_string());
    }

    if existing_loans >= MULTI_LOAN_THRESHOLD {
        insights.push(MULTI_LOAN_WARNING.to_string());
    }

    if insights.is_empty() {
        insights.push(PROCEED_NOTE.to_string());
    }

    insights
}
