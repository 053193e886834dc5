use super::domain::InstallmentRecord;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LedgerImportError {
    #[error("failed to read installment ledger: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid installment CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}

/// Reads installment ledgers exported as CSV.
///
/// Expected headers: `installment_number,due_date,amount,paid,paid_date,is_overdue`.
/// Only `installment_number` and `due_date` are required.
pub struct LedgerImporter;

impl LedgerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InstallmentRecord>, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<InstallmentRecord>, LedgerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<LedgerRow>().enumerate() {
            // Line 1 is the header.
            let line = index + 2;
            let record = row?.into_record().map_err(|reason| LedgerImportError::InvalidRow {
                line,
                reason,
            })?;
            records.push(record);
        }

        records.sort_by_key(|record| record.installment_number);
        debug!(rows = records.len(), "installment ledger imported");
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    installment_number: u32,
    due_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    paid: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    paid_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_overdue: Option<String>,
}

impl LedgerRow {
    fn into_record(self) -> Result<InstallmentRecord, String> {
        let due_date = parse_date(&self.due_date)
            .ok_or_else(|| format!("due_date '{}' is not a date", self.due_date))?;
        let amount = self
            .amount
            .as_deref()
            .map(|raw| {
                raw.parse::<f64>()
                    .map_err(|_| format!("amount '{raw}' is not a number"))
            })
            .transpose()?;
        let paid_date = self
            .paid_date
            .as_deref()
            .map(|raw| parse_date(raw).ok_or_else(|| format!("paid_date '{raw}' is not a date")))
            .transpose()?;
        let paid = parse_flag("paid", self.paid.as_deref())?;
        let is_overdue = parse_flag("is_overdue", self.is_overdue.as_deref())?;

        Ok(InstallmentRecord {
            installment_number: self.installment_number,
            due_date,
            amount,
            paid,
            paid_date,
            is_overdue,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(column: &str, raw: Option<&str>) -> Result<bool, String> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(format!("{column} '{raw}' is not a boolean")),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_flags_dates_and_optional_columns() {
        let csv = "installment_number,due_date,amount,paid,paid_date,is_overdue\n\
2,2025-02-28,1500.50,no,,yes\n\
1,2025-01-29T00:00:00Z,1500.50,TRUE,2025-01-27,0\n";

        let records = LedgerImporter::from_reader(Cursor::new(csv)).expect("ledger parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].installment_number, 1);
        assert!(records[0].paid);
        assert_eq!(
            records[0].due_date,
            NaiveDate::from_ymd_opt(2025, 1, 29).expect("valid")
        );
        assert_eq!(
            records[0].paid_date,
            NaiveDate::from_ymd_opt(2025, 1, 27)
        );
        assert!(!records[1].paid);
        assert!(records[1].is_overdue);
        assert_eq!(records[1].amount, Some(1500.5));
    }

    #[test]
    fn minimal_columns_default_to_unpaid() {
        let csv = "installment_number,due_date\n1,2025-05-01\n";

        let records = LedgerImporter::from_reader(Cursor::new(csv)).expect("ledger parses");

        assert_eq!(records[0].amount, None);
        assert!(!records[0].paid);
        assert!(!records[0].is_overdue);
    }

    #[test]
    fn reports_line_of_malformed_flag() {
        let csv = "installment_number,due_date,paid\n1,2025-05-01,true\n2,2025-06-01,maybe\n";

        match LedgerImporter::from_reader(Cursor::new(csv)) {
            Err(LedgerImportError::InvalidRow { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("maybe"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_due_date() {
        let csv = "installment_number,due_date\n1,next tuesday\n";
        assert!(matches!(
            LedgerImporter::from_reader(Cursor::new(csv)),
            Err(LedgerImportError::InvalidRow { line: 2, .. })
        ));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match LedgerImporter::from_path("./does-not-exist.csv") {
            Err(LedgerImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
