use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a loan as reported by the system of record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanStatus {
    #[default]
    Active,
    Completed,
    Defaulted,
    Other,
}

impl LoanStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanStatus::Active => "Active",
            LoanStatus::Completed => "Completed",
            LoanStatus::Defaulted => "Defaulted",
            LoanStatus::Other => "Other",
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, LoanStatus::Active)
    }
}

impl From<&str> for LoanStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            "defaulted" => Self::Defaulted,
            _ => Self::Other,
        }
    }
}

impl From<String> for LoanStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<LoanStatus> for String {
    fn from(value: LoanStatus) -> Self {
        value.label().to_string()
    }
}

/// One scheduled repayment. `amount` and `paid_date` only matter to portfolio analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRecord {
    #[serde(default)]
    pub installment_number: u32,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_overdue: bool,
}

impl InstallmentRecord {
    pub fn unpaid(installment_number: u32, due_date: NaiveDate, amount: Option<f64>) -> Self {
        Self {
            installment_number,
            due_date,
            amount,
            paid: false,
            paid_date: None,
            is_overdue: false,
        }
    }

    /// Counts toward missed payments: flagged overdue and still unpaid.
    pub fn is_missed(&self) -> bool {
        self.is_overdue && !self.paid
    }
}
