use crate::engine::Engine;
use crate::knowledge::{DrugClassEntry, DrugModality};
use crate::model::classification::{MutationClassification, MutationKind};
use crate::model::efficacy::Efficacy;
use crate::model::record::DrugRecommendation;
use crate::model::thresholds::Thresholds;

/// Loose fragment match: either string contains the other.
pub fn fragment_matches(detail: &str, fragment: &str) -> bool {
    fragment.contains(detail) || detail.contains(fragment)
}

pub fn matches_any(detail: &str, fragments: &[String]) -> bool {
    fragments.iter().any(|f| fragment_matches(detail, f))
}

/// Lower resistance means higher efficacy.
pub fn efficacy_from_score(score: f64, t: &Thresholds) -> Efficacy {
    if score < t.efficacy_high_below {
        Efficacy::High
    } else if score < t.efficacy_medium_below {
        Efficacy::Medium
    } else {
        Efficacy::Low
    }
}

pub fn efficacy_for(
    detail: &str,
    class: &DrugClassEntry,
    classification: &MutationClassification,
    t: &Thresholds,
) -> Efficacy {
    if matches_any(detail, &class.effective_against) {
        return efficacy_from_score(classification.resistance_score, t);
    }
    if matches_any(detail, &class.resistant_against) {
        return Efficacy::Low;
    }
    if class.modality == DrugModality::MonoclonalAntibody && is_all_digits(detail) {
        // only overflow can fail here, and that is a very large copy number
        let high = match detail.parse::<u64>() {
            Ok(copies) => copies >= t.antibody_high_copies,
            Err(_) => true,
        };
        return if high { Efficacy::High } else { Efficacy::Medium };
    }
    Efficacy::Medium
}

pub fn rationale(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::Activating => "Activating mutation typically responsive to kinase inhibition",
        MutationKind::Resistance => "Resistance mutation requiring specialized targeting approach",
        MutationKind::Amplification => {
            "Overexpression benefits from receptor blocking or high-dose TKI"
        }
        MutationKind::Structural | MutationKind::Unknown => {
            "General EGFR targeting approach recommended"
        }
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Engine<'_> {
    /// One recommendation per drug, in declared class order then drug order.
    pub fn recommend(
        &self,
        detail: &str,
        classification: &MutationClassification,
    ) -> Vec<DrugRecommendation> {
        let t = self.thresholds();
        let why = rationale(classification.kind);
        let mut out = Vec::new();
        for class in self.knowledge().drug_classes() {
            let efficacy = efficacy_for(detail, class, classification, t);
            for drug in &class.drugs {
                out.push(DrugRecommendation {
                    drug_name: drug.clone(),
                    drug_class: class.name.clone(),
                    efficacy,
                    rationale: why.to_string(),
                    class_mechanism: class.mechanism.clone(),
                    approval_year: class.approval_year,
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/recommend.rs"]
mod tests;
