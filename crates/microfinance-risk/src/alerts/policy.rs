use serde::{Deserialize, Serialize};

/// Thresholds behind the alert rules and the default-probability estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// Missed installments at or above this count raise a high-severity alert.
    pub high_missed_threshold: usize,
    /// Missed installments at or above this count (below high) raise a medium alert.
    pub medium_missed_threshold: usize,
    /// Payment-rate analysis needs strictly more installments than this.
    pub min_history_for_rate: usize,
    pub poor_payment_rate: f64,
    /// How many of the latest installments the recency check inspects.
    pub recent_window: usize,
    pub recent_unpaid_threshold: usize,
    pub risk_score_weight: f64,
    pub overdue_penalty: f64,
    /// Multiplier for any loan that is not `Active`.
    pub inactive_status_factor: f64,
    /// Score assumed when the client was never scored.
    pub fallback_client_risk_score: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            high_missed_threshold: 3,
            medium_missed_threshold: 2,
            min_history_for_rate: 3,
            poor_payment_rate: 0.5,
            recent_window: 3,
            recent_unpaid_threshold: 2,
            risk_score_weight: 0.5,
            overdue_penalty: 15.0,
            inactive_status_factor: 1.5,
            fallback_client_risk_score: 50.0,
        }
    }
}
