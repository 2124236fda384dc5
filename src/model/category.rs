use std::fmt;

use serde::{Deserialize, Serialize};

/// Mutation category as entered by the caller.
///
/// Labels are matched exactly (case-sensitive). Anything outside the
/// recognized set is kept verbatim in `Other` so it can still be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MutationCategory {
    #[default]
    PointMutation,
    Deletion,
    Insertion,
    Amplification,
    Duplication,
    Other(String),
}

impl MutationCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Point Mutation" => MutationCategory::PointMutation,
            "Deletion" => MutationCategory::Deletion,
            "Insertion" => MutationCategory::Insertion,
            "Amplification" => MutationCategory::Amplification,
            "Duplication" => MutationCategory::Duplication,
            other => MutationCategory::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MutationCategory::PointMutation => "Point Mutation",
            MutationCategory::Deletion => "Deletion",
            MutationCategory::Insertion => "Insertion",
            MutationCategory::Amplification => "Amplification",
            MutationCategory::Duplication => "Duplication",
            MutationCategory::Other(label) => label.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, MutationCategory::Other(_))
    }

    pub fn recognized() -> &'static [&'static str] {
        &[
            "Point Mutation",
            "Deletion",
            "Insertion",
            "Amplification",
            "Duplication",
        ]
    }
}

impl From<String> for MutationCategory {
    fn from(value: String) -> Self {
        MutationCategory::from_label(&value)
    }
}

impl From<&str> for MutationCategory {
    fn from(value: &str) -> Self {
        MutationCategory::from_label(value)
    }
}

impl From<MutationCategory> for String {
    fn from(value: MutationCategory) -> Self {
        match value {
            MutationCategory::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MutationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
