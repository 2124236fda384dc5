use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::knowledge::defs::{
    CaseEntry, DrugClassEntry, KnowledgeBase, MutationEntry, ReportNotes, TrialEntry,
};
use crate::model::thresholds::Thresholds;

const BUILTIN_KNOWLEDGE: &str = include_str!("../../assets/knowledge/egfr.toml");
const BUILTIN_SOURCE: &str = "<builtin>";

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no mutations found in {0}")]
    EmptyMutations(String),
    #[error("no drug classes found in {0}")]
    EmptyDrugClasses(String),
    #[error("duplicate mutation id: {0}")]
    DuplicateMutation(String),
    #[error("duplicate drug class: {0}")]
    DuplicateDrugClass(String),
    #[error("resistance score for {id} outside [0, 1]: {score}")]
    ScoreOutOfRange { id: String, score: f64 },
}

#[derive(serde::Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    mutation: Vec<MutationEntry>,
    #[serde(default)]
    drug_class: Vec<DrugClassEntry>,
    #[serde(default)]
    trial: Vec<TrialEntry>,
    #[serde(default)]
    case: Vec<CaseEntry>,
    #[serde(default)]
    scoring: Thresholds,
    #[serde(default)]
    report: ReportNotes,
}

impl KnowledgeBase {
    /// Knowledge base compiled into the binary.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        parse_knowledge(BUILTIN_KNOWLEDGE, BUILTIN_SOURCE)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, KnowledgeError> {
        let text = fs::read_to_string(path)?;
        parse_knowledge(&text, &path.to_string_lossy())
    }

    /// Loads `path` when given, otherwise the builtin knowledge base.
    pub fn load(path: Option<&Path>) -> Result<Self, KnowledgeError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::builtin(),
        }
    }
}

pub fn parse_knowledge(text: &str, source: &str) -> Result<KnowledgeBase, KnowledgeError> {
    let parsed: KnowledgeFile = toml::from_str(text)?;

    if parsed.mutation.is_empty() {
        return Err(KnowledgeError::EmptyMutations(source.to_string()));
    }
    if parsed.drug_class.is_empty() {
        return Err(KnowledgeError::EmptyDrugClasses(source.to_string()));
    }

    let mut seen = HashSet::new();
    for entry in &parsed.mutation {
        if !seen.insert(entry.id.as_str()) {
            return Err(KnowledgeError::DuplicateMutation(entry.id.clone()));
        }
        if !(0.0..=1.0).contains(&entry.resistance_score) {
            return Err(KnowledgeError::ScoreOutOfRange {
                id: entry.id.clone(),
                score: entry.resistance_score,
            });
        }
    }

    let mut seen = HashSet::new();
    for class in &parsed.drug_class {
        if !seen.insert(class.name.as_str()) {
            return Err(KnowledgeError::DuplicateDrugClass(class.name.clone()));
        }
    }

    tracing::debug!(
        source,
        mutations = parsed.mutation.len(),
        drug_classes = parsed.drug_class.len(),
        trials = parsed.trial.len(),
        cases = parsed.case.len(),
        "knowledge base loaded"
    );

    Ok(KnowledgeBase {
        mutations: parsed.mutation,
        drug_classes: parsed.drug_class,
        trials: parsed.trial,
        cases: parsed.case,
        thresholds: parsed.scoring,
        report: parsed.report,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/knowledge/loader.rs"]
mod tests;
