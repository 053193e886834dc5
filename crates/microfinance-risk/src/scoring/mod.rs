//! Weighted five-factor credit risk model and the loan terms derived from it.

mod bands;
mod config;
mod domain;
mod insights;
mod rules;
mod terms;

#[cfg(test)]
mod tests;

pub use bands::{Band, BandBound, BandTable, ScoringBands};
pub use config::{ScoringConfigError, ScoringWeights};
pub use domain::{
    ClientProfile, CreditHistory, EmploymentStatus, FactorContribution, RiskAssessment,
    RiskLevel, ScoringFactor,
};
pub use terms::{
    ApprovalRecommendation, LoanTermSuggestion, PricingPolicy, PricingTier, StressTest,
};

use crate::error::RiskError;
use crate::ledger::amortize;
use crate::rounding::round2;
use insights::generate_insights;
use rules::score_profile;
use tracing::{debug, info};

/// Stateless scorer. Cloning is cheap enough to hand one to every caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskScorer {
    weights: ScoringWeights,
    bands: ScoringBands,
    pricing: PricingPolicy,
}

impl RiskScorer {
    /// Weights are taken as given; `ScoringWeights::validate` is the caller's gate.
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn with_bands(mut self, bands: ScoringBands) -> Self {
        self.bands = bands;
        self
    }

    /// Rejects policies that could recommend a zero-month tenor.
    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Result<Self, RiskError> {
        pricing.validate()?;
        self.pricing = pricing;
        Ok(self)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn bands(&self) -> &ScoringBands {
        &self.bands
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Composite 0-100 score (higher is riskier) and its level.
    pub fn calculate_risk_score(
        &self,
        profile: &ClientProfile,
        loan_amount: Option<f64>,
    ) -> RiskAssessment {
        let components = score_profile(profile, loan_amount, &self.weights, &self.bands);
        let raw_score: f64 = components.iter().map(|component| component.weighted).sum();
        let risk_score = round2(raw_score);
        let risk_level = RiskLevel::from_score(risk_score);

        debug!(
            raw_score,
            risk_score,
            risk_level = risk_level.label(),
            "client risk scored"
        );

        RiskAssessment {
            risk_score,
            risk_level,
            components,
        }
    }

    /// Price and size a requested principal for this client.
    pub fn suggest_loan_terms(&self, profile: &ClientProfile, loan_amount: f64) -> LoanTermSuggestion {
        let assessment = self.calculate_risk_score(profile, Some(loan_amount));
        let level = assessment.risk_level;
        let income = profile.monthly_income;

        let annual_rate = self.pricing.annual_rate(level, loan_amount);
        let duration = self.pricing.duration_months(level, loan_amount);
        let installment = amortize(loan_amount, annual_rate, duration);

        let has_income = income > 0.0;
        let loan_to_income = has_income.then(|| loan_amount / income);
        let debt_service = has_income.then(|| installment / income * 100.0);
        let max_suggested_loan = if has_income {
            income * self.pricing.max_income_multiple
        } else {
            loan_amount
        };

        let stress_rate = annual_rate + self.pricing.stress_shock;
        let stress_installment = amortize(loan_amount, stress_rate, duration);

        let insights = generate_insights(debt_service, loan_to_income, profile.existing_loans);
        let approval_recommendation = ApprovalRecommendation::for_level(level);

        info!(
            risk_level = level.label(),
            annual_rate,
            duration,
            approval = approval_recommendation.label(),
            "loan terms recommended"
        );

        LoanTermSuggestion {
            recommended_interest_rate: round2(annual_rate),
            recommended_duration_months: duration,
            recommended_monthly_installment: round2(installment),
            risk_level: level,
            risk_score: assessment.risk_score,
            loan_to_income_ratio: loan_to_income.map(round2),
            debt_service_ratio: debt_service.map(round2),
            max_suggested_loan: round2(max_suggested_loan),
            stress_test: StressTest {
                interest_rate: round2(stress_rate),
                monthly_installment: round2(stress_installment),
            },
            approval_recommendation,
            insights,
        }
    }
}
