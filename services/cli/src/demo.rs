use crate::commands::{render_assessment, render_report, render_suggestion};
use crate::infra::parse_date;
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::Args;
use microfinance_risk::error::AppError;
use microfinance_risk::{
    overdue_watchlist, ClientProfile, CreditHistory, DashboardStats, DefaultAlertSystem,
    EmploymentStatus, InstallmentLedger, LoanSnapshot, LoanStatus, LoanTerms, PortfolioLoan,
    RepaymentSchedule, RiskScorer,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Skip the portfolio dashboard portion of the demo.
    #[arg(long)]
    pub(crate) skip_portfolio: bool,
}

struct DemoClient {
    client_id: u64,
    name: &'static str,
    profile: ClientProfile,
    loan_type: &'static str,
    loan_amount: f64,
    /// Installments the client has settled so far.
    paid_installments: u32,
}

fn demo_clients() -> Vec<DemoClient> {
    vec![
        DemoClient {
            client_id: 1,
            name: "Amina Traders",
            profile: ClientProfile {
                monthly_income: 60_000.0,
                employment_status: EmploymentStatus::Employed,
                existing_loans: 0,
                credit_history: CreditHistory::Good,
            },
            loan_type: "Business",
            loan_amount: 600_000.0,
            paid_installments: 5,
        },
        DemoClient {
            client_id: 2,
            name: "Bilal Tailoring",
            profile: ClientProfile {
                monthly_income: 30_000.0,
                employment_status: EmploymentStatus::SelfEmployed,
                existing_loans: 1,
                credit_history: CreditHistory::Average,
            },
            loan_type: "Business",
            loan_amount: 100_000.0,
            paid_installments: 3,
        },
        DemoClient {
            client_id: 3,
            name: "Chanda Farms",
            profile: ClientProfile {
                monthly_income: 12_000.0,
                employment_status: EmploymentStatus::Unemployed,
                existing_loans: 3,
                credit_history: CreditHistory::Poor,
            },
            loan_type: "Agriculture",
            loan_amount: 40_000.0,
            paid_installments: 1,
        },
    ]
}

pub(crate) fn run_demo(scorer: &RiskScorer, args: DemoArgs) -> Result<(), AppError> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let disbursed_on = as_of - Duration::days(185);

    println!("Microfinance risk demo (as of {as_of})");
    let mut portfolio = Vec::new();
    let mut client_levels = Vec::new();
    let alert_system = DefaultAlertSystem::default();

    for client in demo_clients() {
        println!("\n== {} ==", client.name);
        let assessment = scorer.calculate_risk_score(&client.profile, Some(client.loan_amount));
        render_assessment(&assessment);
        client_levels.push(Some(assessment.risk_level));

        println!("\nLoan terms for {:.2}", client.loan_amount);
        let suggestion = scorer.suggest_loan_terms(&client.profile, client.loan_amount);
        render_suggestion(&suggestion);

        let schedule = RepaymentSchedule::generate(&LoanTerms {
            principal: client.loan_amount,
            annual_interest_rate: suggestion.recommended_interest_rate,
            duration_months: suggestion.recommended_duration_months,
            start_date: disbursed_on,
        })?;
        let mut ledger = InstallmentLedger::new(LoanStatus::Active, schedule.installments);
        for number in 1..=client.paid_installments {
            let due = ledger
                .installments()
                .iter()
                .find(|installment| installment.installment_number == number)
                .map(|installment| installment.due_date);
            if let Some(due) = due {
                ledger.mark_paid(number, due)?;
            }
        }
        let flagged = ledger.refresh_overdue(as_of);
        println!(
            "\nLedger: {} paid, {} overdue as of {as_of} ({flagged} past due)",
            ledger.paid_count(),
            ledger.overdue_count()
        );

        let report = alert_system.assess_loan(
            &LoanSnapshot::new(ledger.status()),
            ledger.installments(),
            Some(assessment.risk_score),
        );
        render_report(&report);

        let (status, installments) = ledger.into_parts();
        portfolio.push(PortfolioLoan {
            loan_id: client.client_id * 100,
            client_id: client.client_id,
            client_name: client.name.to_string(),
            client_risk_level: Some(assessment.risk_level),
            loan_type: client.loan_type.to_string(),
            loan_amount: client.loan_amount,
            start_date: disbursed_on,
            status,
            installments,
        });
    }

    if args.skip_portfolio {
        return Ok(());
    }

    println!("\n== Portfolio ==");
    let stats = DashboardStats::compute(&client_levels, &portfolio, as_of.year());
    let distribution = &stats.clients.risk_distribution;
    println!(
        "- {} clients: {} low / {} medium / {} high risk",
        stats.clients.total, distribution.low, distribution.medium, distribution.high
    );
    println!(
        "- {} loans ({} active, {} completed, {} defaulted)",
        stats.loans.total, stats.loans.active, stats.loans.completed, stats.loans.defaulted
    );
    println!(
        "- disbursed {:.2} | expected {:.2} | collected {:.2} | collection rate {:.2}%",
        stats.financial.total_disbursed,
        stats.financial.total_expected,
        stats.financial.total_collected,
        stats.financial.collection_rate
    );
    println!(
        "- {} overdue installments across the book",
        stats.alerts.overdue_installments
    );

    let watchlist = overdue_watchlist(&portfolio);
    if watchlist.is_empty() {
        println!("Watchlist: no active loans overdue");
    } else {
        println!("Watchlist:");
        for entry in watchlist {
            let level = entry
                .risk_level
                .map(|level| level.label())
                .unwrap_or("Unscored");
            println!(
                "  - loan {} ({}) {} overdue | {:.2} | {} risk",
                entry.loan_id, entry.client_name, entry.overdue_count, entry.loan_amount, level
            );
        }
    }

    Ok(())
}
