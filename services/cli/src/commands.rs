use crate::infra::{emit, parse_date, parse_status, OutputFormat};
use chrono::NaiveDate;
use clap::Args;
use microfinance_risk::error::AppError;
use microfinance_risk::ledger::LedgerImporter;
use microfinance_risk::{
    ClientProfile, CreditHistory, DefaultAlertSystem, EmploymentStatus, InstallmentLedger,
    LoanRiskReport, LoanSnapshot, LoanStatus, LoanTermSuggestion, LoanTerms, RepaymentSchedule,
    RiskAssessment, RiskScorer,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Monthly income in local currency
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: f64,
    /// Employment status (Employed, Self-Employed, Unemployed)
    #[arg(long)]
    pub(crate) employment: Option<String>,
    /// Number of loans the client is already repaying
    #[arg(long, default_value_t = 0)]
    pub(crate) existing_loans: u32,
    /// Credit history (Good, Average, Poor)
    #[arg(long)]
    pub(crate) credit_history: Option<String>,
}

impl ProfileArgs {
    pub(crate) fn to_profile(&self) -> ClientProfile {
        ClientProfile {
            monthly_income: self.income,
            employment_status: self
                .employment
                .as_deref()
                .map(EmploymentStatus::from)
                .unwrap_or_default(),
            existing_loans: self.existing_loans,
            credit_history: self
                .credit_history
                .as_deref()
                .map(CreditHistory::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Requested loan amount; enables the loan-to-income factor
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) loan_amount: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Requested loan amount
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) loan_amount: f64,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    /// Principal to amortize
    #[arg(long)]
    pub(crate) principal: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Number of monthly installments
    #[arg(long)]
    pub(crate) months: u32,
    /// Disbursement date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: NaiveDate,
}

#[derive(Args, Debug)]
pub(crate) struct AlertsArgs {
    /// Installment ledger CSV export
    #[arg(long)]
    pub(crate) ledger: PathBuf,
    /// Current loan status
    #[arg(long, value_parser = parse_status, default_value = "Active")]
    pub(crate) status: LoanStatus,
    /// Client risk score; unscored clients are treated as 50
    #[arg(long)]
    pub(crate) risk_score: Option<f64>,
    /// Re-flag overdue installments as of this date (YYYY-MM-DD) before evaluating
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_score(
    scorer: &RiskScorer,
    args: ScoreArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let profile = args.profile.to_profile();
    let assessment = scorer.calculate_risk_score(&profile, args.loan_amount);
    emit(format, &assessment, render_assessment)
}

pub(crate) fn run_suggest(
    scorer: &RiskScorer,
    args: SuggestArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let profile = args.profile.to_profile();
    let suggestion = scorer.suggest_loan_terms(&profile, args.loan_amount);
    emit(format, &suggestion, render_suggestion)
}

pub(crate) fn run_schedule(args: ScheduleArgs, format: OutputFormat) -> Result<(), AppError> {
    let schedule = RepaymentSchedule::generate(&LoanTerms {
        principal: args.principal,
        annual_interest_rate: args.rate,
        duration_months: args.months,
        start_date: args.start,
    })?;
    emit(format, &schedule, render_schedule)
}

pub(crate) fn run_alerts(args: AlertsArgs, format: OutputFormat) -> Result<(), AppError> {
    let records = LedgerImporter::from_path(&args.ledger)?;
    let mut ledger = InstallmentLedger::new(args.status, records);
    if let Some(as_of) = args.as_of {
        let flagged = ledger.refresh_overdue(as_of);
        info!(%as_of, flagged, "overdue flags refreshed");
    }

    let report = DefaultAlertSystem::default().assess_loan(
        &LoanSnapshot::new(ledger.status()),
        ledger.installments(),
        args.risk_score,
    );
    emit(format, &report, render_report)
}

pub(crate) fn render_assessment(assessment: &RiskAssessment) {
    println!(
        "Risk score {:.2} ({})",
        assessment.risk_score,
        assessment.risk_level.label()
    );
    for component in &assessment.components {
        println!(
            "  - {:?}: sub-score {:.0} x {:.2} = {:.2} ({})",
            component.factor,
            component.sub_score,
            component.weight,
            component.weighted,
            component.notes
        );
    }
}

pub(crate) fn render_suggestion(suggestion: &LoanTermSuggestion) {
    println!(
        "Recommendation: {} ({} risk, score {:.2})",
        suggestion.approval_recommendation.label(),
        suggestion.risk_level.label(),
        suggestion.risk_score
    );
    println!(
        "- {:.2}% over {} months -> {:.2} per month",
        suggestion.recommended_interest_rate,
        suggestion.recommended_duration_months,
        suggestion.recommended_monthly_installment
    );
    println!(
        "- stress test at {:.2}% -> {:.2} per month",
        suggestion.stress_test.interest_rate, suggestion.stress_test.monthly_installment
    );
    match (suggestion.loan_to_income_ratio, suggestion.debt_service_ratio) {
        (Some(lti), Some(dsr)) => println!(
            "- loan-to-income {lti:.2} | debt service {dsr:.2}% | max suggested {:.2}",
            suggestion.max_suggested_loan
        ),
        _ => println!("- ratios unavailable without a positive income"),
    }
    for insight in &suggestion.insights {
        println!("  * {insight}");
    }
}

pub(crate) fn render_schedule(schedule: &RepaymentSchedule) {
    println!(
        "{} installments of {:.2} (total repayable {:.2})",
        schedule.installments.len(),
        schedule.monthly_installment,
        schedule.total_repayable
    );
    for installment in &schedule.installments {
        println!(
            "  #{:>3} due {}",
            installment.installment_number, installment.due_date
        );
    }
}

pub(crate) fn render_report(report: &LoanRiskReport) {
    println!(
        "Default probability {:.2}% | {} of {} installments overdue",
        report.default_probability, report.overdue_installments, report.total_installments
    );
    if report.alerts.is_empty() {
        println!("No alerts raised");
        return;
    }
    for alert in &report.alerts {
        println!(
            "  [{}] {}: {}",
            alert.severity.label(),
            alert.kind.label(),
            alert.message
        );
        println!("      -> {}", alert.recommendation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_categories_become_unknown() {
        let args = ProfileArgs {
            income: 40_000.0,
            employment: None,
            existing_loans: 1,
            credit_history: Some("good".to_string()),
        };

        let profile = args.to_profile();

        assert_eq!(profile.employment_status, EmploymentStatus::Unknown);
        assert_eq!(profile.credit_history, CreditHistory::Good);
        assert_eq!(profile.existing_loans, 1);
    }
}
