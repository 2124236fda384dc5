use serde::Serialize;

use crate::model::classification::MutationClassification;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedAnalysis {
    pub mechanism: String,
    pub clinical: String,
}

pub fn narrative(classification: &MutationClassification) -> DetailedAnalysis {
    let mechanism = format!(
        "{}\n\nThis mutation affects EGFR function through {}.\n\
         The structural changes lead to altered protein conformation and signaling capacity.",
        classification.mechanism,
        classification.pathway_impact.to_lowercase()
    );
    let clinical = format!(
        "{}\n\nResistance Score: {:.2}/1.0\n\
         This score reflects the likelihood of treatment resistance based on known mechanisms.",
        classification.clinical_significance, classification.resistance_score
    );
    DetailedAnalysis {
        mechanism,
        clinical,
    }
}
