use serde::{Deserialize, Serialize};

use crate::model::classification::{MutationClassification, MutationKind};
use crate::model::descriptor::MutationDescriptor;
use crate::model::thresholds::Thresholds;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationEntry {
    pub id: String,
    pub kind: MutationKind,
    pub mechanism: String,
    pub pathway_impact: String,
    pub resistance_profile: String,
    pub clinical_significance: String,
    #[serde(default)]
    pub affected_pathways: Vec<String>,
    pub resistance_score: f64,
    #[serde(default)]
    pub population_frequency: f64,
}

impl MutationEntry {
    pub fn to_classification(&self) -> MutationClassification {
        MutationClassification {
            kind: self.kind,
            mechanism: self.mechanism.clone(),
            pathway_impact: self.pathway_impact.clone(),
            resistance_profile: self.resistance_profile.clone(),
            clinical_significance: self.clinical_significance.clone(),
            affected_pathways: self.affected_pathways.clone(),
            resistance_score: self.resistance_score,
            population_frequency: self.population_frequency,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugModality {
    #[default]
    SmallMolecule,
    MonoclonalAntibody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugClassEntry {
    pub name: String,
    #[serde(default)]
    pub modality: DrugModality,
    pub drugs: Vec<String>,
    pub mechanism: String,
    /// Mutation fragments the class is expected to work against.
    #[serde(default)]
    pub effective_against: Vec<String>,
    /// Mutation fragments known to defeat the class.
    #[serde(default)]
    pub resistant_against: Vec<String>,
    #[serde(default)]
    pub approval_year: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialEntry {
    pub name: String,
    pub drug: String,
    pub population: String,
    pub primary_endpoint: String,
    pub result: String,
}

/// Named set of mutations used for demonstration runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub mutations: Vec<MutationDescriptor>,
}

/// Fixed text blocks printed at the end of the text report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportNotes {
    #[serde(default)]
    pub considerations: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    pub mutations: Vec<MutationEntry>,
    pub drug_classes: Vec<DrugClassEntry>,
    pub trials: Vec<TrialEntry>,
    pub cases: Vec<CaseEntry>,
    pub thresholds: Thresholds,
    pub report: ReportNotes,
}

impl KnowledgeBase {
    /// Exact, case-sensitive lookup. No normalization is applied.
    pub fn lookup_mutation(&self, id: &str) -> Option<&MutationEntry> {
        self.mutations.iter().find(|m| m.id == id)
    }

    pub fn drug_classes(&self) -> impl Iterator<Item = &DrugClassEntry> {
        self.drug_classes.iter()
    }

    pub fn drug_class(&self, name: &str) -> Option<&DrugClassEntry> {
        self.drug_classes.iter().find(|c| c.name == name)
    }

    pub fn trials_for_drug<'a>(&'a self, drug: &'a str) -> impl Iterator<Item = &'a TrialEntry> {
        self.trials.iter().filter(move |t| t.drug == drug)
    }

    pub fn cases(&self) -> &[CaseEntry] {
        &self.cases
    }

    pub fn case(&self, name: &str) -> Option<&CaseEntry> {
        self.cases.iter().find(|c| c.name == name)
    }
}
