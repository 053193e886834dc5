use chrono::NaiveDate;
use microfinance_risk::ledger::{LedgerImportError, LedgerImporter};
use microfinance_risk::{
    overdue_watchlist, AlertKind, DashboardStats, DefaultAlertSystem, InstallmentLedger,
    LoanSnapshot, LoanStatus, PortfolioLoan, RiskLevel,
};
use std::io::Write;
use tempfile::NamedTempFile;

const LEDGER_CSV: &str = "installment_number,due_date,amount,paid,paid_date,is_overdue\n\
3,2025-03-31,5000,no,,\n\
1,2025-01-31,5000,yes,2025-01-30,no\n\
2,2025-03-02,5000,no,,no\n\
4,2025-04-30,5000,,,\n";

fn write_ledger(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp ledger");
    file.write_all(contents.as_bytes()).expect("write temp ledger");
    file
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn imported_ledger_feeds_alerts_after_overdue_refresh() {
    let file = write_ledger(LEDGER_CSV);
    let records = LedgerImporter::from_path(file.path()).expect("ledger imports");

    let numbers: Vec<u32> = records.iter().map(|record| record.installment_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(records[0].paid_date, Some(date(2025, 1, 30)));

    let mut ledger = InstallmentLedger::new(LoanStatus::Active, records);
    assert_eq!(ledger.refresh_overdue(date(2025, 4, 15)), 2);
    assert_eq!(ledger.overdue_count(), 2);

    let alerts = DefaultAlertSystem::default().check_default_risk(
        &LoanSnapshot::new(ledger.status()),
        ledger.installments(),
    );
    let kinds: Vec<AlertKind> = alerts.iter().map(|alert| alert.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AlertKind::MissedPayments,
            AlertKind::PoorPaymentHistory,
            AlertKind::RecentPaymentIssues,
        ]
    );
}

#[test]
fn malformed_rows_report_their_line() {
    let file = write_ledger(
        "installment_number,due_date,amount,paid\n\
1,2025-01-31,5000,yes\n\
2,not-a-date,5000,no\n",
    );

    match LedgerImporter::from_path(file.path()) {
        Err(LedgerImportError::InvalidRow { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("not-a-date"));
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn missing_ledger_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = LedgerImporter::from_path(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(LedgerImportError::Io(_))));
}

#[test]
fn imported_loans_roll_up_into_the_dashboard() {
    let file = write_ledger(LEDGER_CSV);
    let mut ledger = InstallmentLedger::new(
        LoanStatus::Active,
        LedgerImporter::from_path(file.path()).expect("ledger imports"),
    );
    ledger.refresh_overdue(date(2025, 4, 15));
    let (status, installments) = ledger.into_parts();

    let loans = vec![
        PortfolioLoan {
            loan_id: 7,
            client_id: 70,
            client_name: "Imported client".to_string(),
            client_risk_level: Some(RiskLevel::High),
            loan_type: "Business".to_string(),
            loan_amount: 18_000.0,
            start_date: date(2025, 1, 1),
            status,
            installments,
        },
        PortfolioLoan {
            loan_id: 8,
            client_id: 80,
            client_name: "Closed client".to_string(),
            client_risk_level: None,
            loan_type: "Personal".to_string(),
            loan_amount: 2_000.0,
            start_date: date(2024, 6, 1),
            status: LoanStatus::Defaulted,
            installments: Vec::new(),
        },
    ];

    let stats = DashboardStats::compute(&[Some(RiskLevel::High), None], &loans, 2025);
    assert_eq!(stats.financial.total_disbursed, 20_000.0);
    assert_eq!(stats.financial.total_expected, 20_000.0);
    assert_eq!(stats.financial.total_collected, 5_000.0);
    assert_eq!(stats.financial.collection_rate, 25.0);
    assert_eq!(stats.financial.yearly.disbursed, 18_000.0);
    assert_eq!(stats.alerts.overdue_installments, 2);

    let watchlist = overdue_watchlist(&loans);
    assert_eq!(watchlist.len(), 1);
    assert_eq!(watchlist[0].loan_id, 7);
    assert_eq!(watchlist[0].overdue_count, 2);
}
