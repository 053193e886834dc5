use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Relative weight of each factor in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub income: f64,
    pub employment: f64,
    pub existing_loans: f64,
    pub credit_history: f64,
    pub loan_to_income: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            income: 0.25,
            employment: 0.20,
            existing_loans: 0.20,
            credit_history: 0.25,
            loan_to_income: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.income + self.employment + self.existing_loans + self.credit_history + self.loan_to_income
    }

    /// Weights must be finite, non-negative, and sum to 1.0 so the score stays within 0-100.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let named = [
            ("income", self.income),
            ("employment", self.employment),
            ("existing_loans", self.existing_loans),
            ("credit_history", self.credit_history),
            ("loan_to_income", self.loan_to_income),
        ];
        if let Some((factor, value)) = named
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ScoringConfigError::NegativeWeight {
                factor: *factor,
                value: *value,
            });
        }

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringConfigError::WeightSum { total });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("weight for {factor} must be a finite non-negative number, got {value}")]
    NegativeWeight { factor: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {total:.4}")]
    WeightSum { total: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-9);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn rejects_negative_weight() {
        let weights = ScoringWeights {
            employment: -0.2,
            income: 0.65,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(ScoringConfigError::NegativeWeight {
                factor: "employment",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unbalanced_weights() {
        let weights = ScoringWeights {
            loan_to_income: 0.5,
            ..ScoringWeights::default()
        };
        match weights.validate() {
            Err(ScoringConfigError::WeightSum { total }) => assert!((total - 1.4).abs() < 1e-9),
            other => panic!("expected weight sum error, got {other:?}"),
        }
    }
}
