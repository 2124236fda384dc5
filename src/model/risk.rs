use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse resistance risk, used both per record and for a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Cutoffs are exclusive: a score equal to `high_above` is Medium.
    pub fn from_score(score: f64, high_above: f64, medium_above: f64) -> Self {
        if score > high_above {
            RiskLevel::High
        } else if score > medium_above {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
