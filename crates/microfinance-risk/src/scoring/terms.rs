use super::domain::RiskLevel;
use crate::error::RiskError;
use serde::{Deserialize, Serialize};

/// Starting price and longest tenor offered to one risk level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub base_annual_rate: f64,
    pub max_duration_months: u32,
}

/// Rate and tenor policy applied on top of the risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub low: PricingTier,
    pub medium: PricingTier,
    pub high: PricingTier,
    /// Amounts strictly above this carry `large_loan_premium` extra rate points.
    pub large_loan_threshold: f64,
    pub large_loan_premium: f64,
    /// Amounts strictly below this receive `small_loan_discount` fewer rate points.
    pub small_loan_threshold: f64,
    pub small_loan_discount: f64,
    /// Amounts up to this ceiling are capped at `short_term_months`.
    pub short_term_ceiling: f64,
    pub short_term_months: u32,
    /// Amounts up to this ceiling are capped at `medium_term_months`.
    pub medium_term_ceiling: f64,
    pub medium_term_months: u32,
    /// Rate points added for the stress scenario.
    pub stress_shock: f64,
    /// Multiple of monthly income treated as the largest safe principal.
    pub max_income_multiple: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            low: PricingTier {
                base_annual_rate: 12.0,
                max_duration_months: 36,
            },
            medium: PricingTier {
                base_annual_rate: 18.0,
                max_duration_months: 24,
            },
            high: PricingTier {
                base_annual_rate: 24.0,
                max_duration_months: 12,
            },
            large_loan_threshold: 500_000.0,
            large_loan_premium: 2.0,
            small_loan_threshold: 50_000.0,
            small_loan_discount: 1.0,
            short_term_ceiling: 50_000.0,
            short_term_months: 12,
            medium_term_ceiling: 200_000.0,
            medium_term_months: 18,
            stress_shock: 3.0,
            max_income_multiple: 15.0,
        }
    }
}

impl PricingPolicy {
    pub fn validate(&self) -> Result<(), RiskError> {
        let tenors = [
            ("low.max_duration_months", self.low.max_duration_months),
            ("medium.max_duration_months", self.medium.max_duration_months),
            ("high.max_duration_months", self.high.max_duration_months),
            ("short_term_months", self.short_term_months),
            ("medium_term_months", self.medium_term_months),
        ];
        match tenors.iter().find(|(_, months)| *months == 0) {
            Some((name, _)) => Err(RiskError::invalid(*name, "must be greater than zero")),
            None => Ok(()),
        }
    }

    pub fn tier(&self, level: RiskLevel) -> PricingTier {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    /// Annual rate in percent after the amount-based adjustment.
    pub fn annual_rate(&self, level: RiskLevel, loan_amount: f64) -> f64 {
        let base = self.tier(level).base_annual_rate;
        if loan_amount > self.large_loan_threshold {
            base + self.large_loan_premium
        } else if loan_amount < self.small_loan_threshold {
            base - self.small_loan_discount
        } else {
            base
        }
    }

    /// Recommended tenor in months; at least one for a validated policy.
    pub fn duration_months(&self, level: RiskLevel, loan_amount: f64) -> u32 {
        let max_duration = self.tier(level).max_duration_months;
        if loan_amount <= self.short_term_ceiling {
            self.short_term_months.min(max_duration)
        } else if loan_amount <= self.medium_term_ceiling {
            self.medium_term_months.min(max_duration)
        } else {
            max_duration
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalRecommendation {
    Approve,
    #[serde(rename = "Review Required")]
    ReviewRequired,
}

impl ApprovalRecommendation {
    pub fn for_level(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low | RiskLevel::Medium => Self::Approve,
            RiskLevel::High => Self::ReviewRequired,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApprovalRecommendation::Approve => "Approve",
            ApprovalRecommendation::ReviewRequired => "Review Required",
        }
    }
}

/// Installment under a rate shock; never alters the recommended terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressTest {
    pub interest_rate: f64,
    pub monthly_installment: f64,
}

/// Recommended terms for a requested principal. Money fields are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTermSuggestion {
    pub recommended_interest_rate: f64,
    pub recommended_duration_months: u32,
    pub recommended_monthly_installment: f64,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub loan_to_income_ratio: Option<f64>,
    pub debt_service_ratio: Option<f64>,
    pub max_suggested_loan: f64,
    pub stress_test: StressTest,
    pub approval_recommendation: ApprovalRecommendation,
    pub insights: Vec<String>,
}
