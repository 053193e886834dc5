use serde::{Deserialize, Serialize};

/// How an observed value is compared against each band's bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandBound {
    /// Matches when `value >= bound`. Bands are listed from the highest bound down.
    AtLeast,
    /// Matches when `value <= bound`. Bands are listed from the lowest bound up.
    AtMost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub bound: f64,
    pub sub_score: f64,
}

/// Ordered threshold table mapping a raw attribute to a 0-100 sub-score.
///
/// The first matching band wins. Values that match nothing, including NaN,
/// fall through to `fallback`, which is always the riskiest sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub comparison: BandBound,
    pub bands: Vec<Band>,
    pub fallback: f64,
}

impl BandTable {
    pub fn at_least(bands: &[(f64, f64)], fallback: f64) -> Self {
        Self::build(BandBound::AtLeast, bands, fallback)
    }

    pub fn at_most(bands: &[(f64, f64)], fallback: f64) -> Self {
        Self::build(BandBound::AtMost, bands, fallback)
    }

    fn build(comparison: BandBound, bands: &[(f64, f64)], fallback: f64) -> Self {
        Self {
            comparison,
            bands: bands
                .iter()
                .map(|&(bound, sub_score)| Band { bound, sub_score })
                .collect(),
            fallback,
        }
    }

    pub fn lookup(&self, value: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| match self.comparison {
                BandBound::AtLeast => value >= band.bound,
                BandBound::AtMost => value <= band.bound,
            })
            .map(|band| band.sub_score)
            .unwrap_or(self.fallback)
    }
}

/// The band tables behind the numeric factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringBands {
    /// Monthly income; higher income lowers the contribution.
    pub income: BandTable,
    /// Count of loans the client already services.
    pub existing_loans: BandTable,
    /// Requested amount divided by monthly income.
    pub loan_to_income: BandTable,
    /// Sub-score used when no ratio can be formed (no amount, or no income).
    pub loan_to_income_default: f64,
}

impl Default for ScoringBands {
    fn default() -> Self {
        Self {
            income: BandTable::at_least(
                &[(50_000.0, 10.0), (30_000.0, 30.0), (20_000.0, 50.0), (10_000.0, 70.0)],
                90.0,
            ),
            existing_loans: BandTable::at_most(&[(0.0, 10.0), (1.0, 30.0), (2.0, 60.0)], 90.0),
            loan_to_income: BandTable::at_most(&[(5.0, 20.0), (10.0, 40.0), (20.0, 60.0)], 90.0),
            loan_to_income_default: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_band_boundaries_are_inclusive_on_lower_bound() {
        let bands = ScoringBands::default();
        assert_eq!(bands.income.lookup(50_000.0), 10.0);
        assert_eq!(bands.income.lookup(49_999.0), 30.0);
        assert_eq!(bands.income.lookup(30_000.0), 30.0);
        assert_eq!(bands.income.lookup(20_000.0), 50.0);
        assert_eq!(bands.income.lookup(10_000.0), 70.0);
        assert_eq!(bands.income.lookup(9_999.99), 90.0);
        assert_eq!(bands.income.lookup(0.0), 90.0);
    }

    #[test]
    fn existing_loans_saturate_at_three() {
        let bands = ScoringBands::default();
        let scores: Vec<f64> = (0..6)
            .map(|count| bands.existing_loans.lookup(count as f64))
            .collect();
        assert_eq!(scores, vec![10.0, 30.0, 60.0, 90.0, 90.0, 90.0]);
    }

    #[test]
    fn loan_to_income_ceilings_are_inclusive() {
        let bands = ScoringBands::default();
        assert_eq!(bands.loan_to_income.lookup(5.0), 20.0);
        assert_eq!(bands.loan_to_income.lookup(5.01), 40.0);
        assert_eq!(bands.loan_to_income.lookup(10.0), 40.0);
        assert_eq!(bands.loan_to_income.lookup(20.0), 60.0);
        assert_eq!(bands.loan_to_income.lookup(20.5), 90.0);
    }

    #[test]
    fn nan_falls_through_to_riskiest_band() {
        let bands = ScoringBands::default();
        assert_eq!(bands.income.lookup(f64::NAN), 90.0);
        assert_eq!(bands.loan_to_income.lookup(f64::NAN), 90.0);
    }
}
