use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected effectiveness of one drug against one classified mutation.
///
/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Efficacy {
    Low,
    Medium,
    High,
}

impl Efficacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Efficacy::Low => "Low",
            Efficacy::Medium => "Medium",
            Efficacy::High => "High",
        }
    }
}

impl fmt::Display for Efficacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
