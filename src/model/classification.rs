use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Activating,
    Resistance,
    Amplification,
    Structural,
    Unknown,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Activating => "activating",
            MutationKind::Resistance => "resistance",
            MutationKind::Amplification => "amplification",
            MutationKind::Structural => "structural",
            MutationKind::Unknown => "unknown",
        }
    }

    pub fn ordered() -> &'static [MutationKind] {
        &[
            MutationKind::Activating,
            MutationKind::Resistance,
            MutationKind::Amplification,
            MutationKind::Structural,
            MutationKind::Unknown,
        ]
    }
}

/// Clinical interpretation of a single mutation descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationClassification {
    pub kind: MutationKind,
    pub mechanism: String,
    pub pathway_impact: String,
    pub resistance_profile: String,
    pub clinical_significance: String,
    pub affected_pathways: Vec<String>,
    /// 0.0 (drug-sensitive) to 1.0 (resistant).
    pub resistance_score: f64,
    pub population_frequency: f64,
}
