use serde::{Deserialize, Serialize};

use crate::model::risk::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub efficacy_high_below: f64,
    pub efficacy_medium_below: f64,
    pub amplification_base: f64,
    pub amplification_step: f64,
    pub amplification_cap: f64,
    pub amplification_baseline_copies: i64,
    pub amplification_default_copies: i64,
    pub amplification_frequency: f64,
    pub unknown_score: f64,
    pub unknown_frequency: f64,
    pub antibody_high_copies: u64,
    pub high_resistance_above: f64,
    pub record_risk_high_above: f64,
    pub record_risk_medium_above: f64,
    pub session_risk_high_above: f64,
    pub session_risk_medium_above: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            efficacy_high_below: 0.3,
            efficacy_medium_below: 0.6,
            amplification_base: 0.3,
            amplification_step: 0.05,
            amplification_cap: 0.7,
            amplification_baseline_copies: 2,
            amplification_default_copies: 6,
            amplification_frequency: 0.15,
            unknown_score: 0.5,
            unknown_frequency: 0.01,
            antibody_high_copies: 4,
            high_resistance_above: 0.7,
            record_risk_high_above: 0.7,
            record_risk_medium_above: 0.4,
            session_risk_high_above: 0.6,
            session_risk_medium_above: 0.3,
        }
    }
}

impl Thresholds {
    /// Resistance score for an amplified gene. Capped above, never below.
    pub fn amplification_score(&self, copy_number: i64) -> f64 {
        let excess = copy_number.saturating_sub(self.amplification_baseline_copies) as f64;
        (self.amplification_base + excess * self.amplification_step).min(self.amplification_cap)
    }

    pub fn record_risk(&self, score: f64) -> RiskLevel {
        RiskLevel::from_score(score, self.record_risk_high_above, self.record_risk_medium_above)
    }

    /// Overall risk from the session's average resistance score.
    pub fn session_risk(&self, average: f64) -> RiskLevel {
        RiskLevel::from_score(average, self.session_risk_high_above, self.session_risk_medium_above)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
