use serde::{Deserialize, Serialize};

/// Client attributes consumed by the scorer. Supplied fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub employment_status: EmploymentStatus,
    #[serde(default, alias = "existing_loans_count")]
    pub existing_loans: u32,
    #[serde(default)]
    pub credit_history: CreditHistory,
}

/// Employment category. Unrecognized text lands in `Unknown`, which scores as the riskiest band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    #[default]
    Unknown,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::SelfEmployed => "self-employed",
            EmploymentStatus::Unemployed => "unemployed",
            EmploymentStatus::Unknown => "unknown",
        }
    }
}

impl From<&str> for EmploymentStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "employed" => Self::Employed,
            "self-employed" | "self employed" | "self_employed" => Self::SelfEmployed,
            "unemployed" => Self::Unemployed,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for EmploymentStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EmploymentStatus> for String {
    fn from(value: EmploymentStatus) -> Self {
        value.label().to_string()
    }
}

/// Repayment track record. Unrecognized text lands in `Unknown`, scored like `Poor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreditHistory {
    Good,
    Average,
    Poor,
    #[default]
    Unknown,
}

impl CreditHistory {
    pub const fn label(self) -> &'static str {
        match self {
            CreditHistory::Good => "good",
            CreditHistory::Average => "average",
            CreditHistory::Poor => "poor",
            CreditHistory::Unknown => "unknown",
        }
    }
}

impl From<&str> for CreditHistory {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => Self::Good,
            "average" => Self::Average,
            "poor" => Self::Poor,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for CreditHistory {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<CreditHistory> for String {
    fn from(value: CreditHistory) -> Self {
        value.label().to_string()
    }
}

/// Categorical risk class derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const LOW_CEILING: f64 = 30.0;
    pub const MEDIUM_CEILING: f64 = 60.0;

    /// Upper bounds are inclusive; anything that is not provably at or below a ceiling is `High`.
    pub fn from_score(score: f64) -> Self {
        if score <= Self::LOW_CEILING {
            Self::Low
        } else if score <= Self::MEDIUM_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// The five dimensions of the weighted model, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    Income,
    Employment,
    ExistingLoans,
    CreditHistory,
    LoanToIncome,
}

/// One factor's share of the composite score, kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: ScoringFactor,
    pub sub_score: f64,
    pub weight: f64,
    pub weighted: f64,
    pub notes: String,
}

/// Scorer output: the rounded composite, its level, and the per-factor trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub components: Vec<FactorContribution>,
}

impl RiskAssessment {
    pub fn component(&self, factor: ScoringFactor) -> Option<&FactorContribution> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}
