use serde::{Deserialize, Serialize};

use crate::model::classification::MutationClassification;
use crate::model::descriptor::MutationDescriptor;
use crate::model::efficacy::Efficacy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecommendation {
    pub drug_name: String,
    pub drug_class: String,
    pub efficacy: Efficacy,
    pub rationale: String,
    pub class_mechanism: String,
    pub approval_year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub descriptor: MutationDescriptor,
    pub classification: MutationClassification,
    pub recommendations: Vec<DrugRecommendation>,
}

impl AnalysisRecord {
    pub fn resistance_score(&self) -> f64 {
        self.classification.resistance_score
    }

    pub fn recommendations_with(&self, efficacy: Efficacy) -> impl Iterator<Item = &DrugRecommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.efficacy == efficacy)
    }
}
