use crate::commands::{
    run_alerts, run_schedule, run_score, run_suggest, AlertsArgs, ScheduleArgs, ScoreArgs,
    SuggestArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::{self, OutputFormat};
use clap::{Parser, Subcommand};
use microfinance_risk::error::AppError;
use microfinance_risk::RiskScorer;

#[derive(Parser, Debug)]
#[command(
    name = "mfrisk",
    about = "Score microfinance clients, suggest loan terms, and flag loans at risk of default",
    version
)]
struct Cli {
    /// Output format for command results
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a client's risk score and level
    Score(ScoreArgs),
    /// Recommend interest rate, duration, and installment for a requested loan
    Suggest(SuggestArgs),
    /// Generate a repayment schedule
    Schedule(ScheduleArgs),
    /// Evaluate an installment ledger for default risk
    Alerts(AlertsArgs),
    /// Walk through scoring, scheduling, alerting, and portfolio analytics
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = infra::bootstrap()?;
    let scorer = RiskScorer::new(config.scoring);

    match cli.command {
        Command::Score(args) => run_score(&scorer, args, cli.format),
        Command::Suggest(args) => run_suggest(&scorer, args, cli.format),
        Command::Schedule(args) => run_schedule(args, cli.format),
        Command::Alerts(args) => run_alerts(args, cli.format),
        Command::Demo(args) => run_demo(&scorer, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_flag_is_global_and_defaults_to_json() {
        let cli = Cli::try_parse_from(["mfrisk", "score", "--income", "40000"]).expect("parses");
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from([
            "mfrisk",
            "schedule",
            "--principal",
            "100000",
            "--rate",
            "18",
            "--months",
            "12",
            "--start",
            "2025-01-01",
            "--format",
            "text",
        ])
        .expect("parses");
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn suggest_requires_a_loan_amount() {
        assert!(Cli::try_parse_from(["mfrisk", "suggest", "--income", "40000"]).is_err());
    }

    #[test]
    fn alerts_parses_status_and_as_of() {
        let cli = Cli::try_parse_from([
            "mfrisk",
            "alerts",
            "--ledger",
            "loan.csv",
            "--status",
            "defaulted",
            "--risk-score",
            "62.5",
            "--as-of",
            "2025-06-01",
        ])
        .expect("parses");

        match cli.command {
            Command::Alerts(args) => {
                assert_eq!(args.status, microfinance_risk::LoanStatus::Defaulted);
                assert_eq!(args.risk_score, Some(62.5));
                assert!(args.as_of.is_some());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
