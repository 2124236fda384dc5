use std::num::IntErrorKind;

use crate::engine::Engine;
use crate::knowledge::{KnowledgeBase, MutationEntry};
use crate::model::category::MutationCategory;
use crate::model::classification::{MutationClassification, MutationKind};
use crate::model::descriptor::MutationDescriptor;
use crate::model::thresholds::Thresholds;

const AMPLIFICATION_PATHWAYS: [&str; 3] = ["MAPK/ERK", "PI3K/AKT", "JAK/STAT"];
const UNKNOWN_PATHWAY: &str = "Unknown";

/// Which branch of the classifier resolved a descriptor.
#[derive(Debug, Clone, Copy)]
pub enum Route<'kb> {
    KnownMutation(&'kb MutationEntry),
    Amplification,
    Unknown,
}

impl Route<'_> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::KnownMutation(_) => "KNOWN_MUTATION",
            Route::Amplification => "AMPLIFICATION",
            Route::Unknown => "UNKNOWN",
        }
    }
}

/// Exact knowledge-base key wins over the stated category.
pub fn resolve_route<'kb>(kb: &'kb KnowledgeBase, descriptor: &MutationDescriptor) -> Route<'kb> {
    if let Some(entry) = kb.lookup_mutation(&descriptor.detail) {
        return Route::KnownMutation(entry);
    }
    if descriptor.category == MutationCategory::Amplification {
        return Route::Amplification;
    }
    Route::Unknown
}

impl Engine<'_> {
    pub fn classify(&self, descriptor: &MutationDescriptor) -> MutationClassification {
        let route = resolve_route(self.knowledge(), descriptor);
        tracing::trace!(
            category = descriptor.category.as_str(),
            detail = descriptor.detail.as_str(),
            route = route.as_str(),
            "classify"
        );
        match route {
            Route::KnownMutation(entry) => entry.to_classification(),
            Route::Amplification => classify_amplification(&descriptor.detail, self.thresholds()),
            Route::Unknown => classify_unknown(descriptor, self.thresholds()),
        }
    }
}

/// Integer copy number. Out-of-range integers saturate; anything else
/// unparsable becomes `default`.
pub fn parse_copy_number(detail: &str, default: i64) -> i64 {
    match detail.trim().parse::<i64>() {
        Ok(copies) => copies,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => default,
        },
    }
}

pub fn classify_amplification(detail: &str, t: &Thresholds) -> MutationClassification {
    let copies = parse_copy_number(detail, t.amplification_default_copies);
    MutationClassification {
        kind: MutationKind::Amplification,
        mechanism: format!("Gene amplification leading to {copies}x overexpression"),
        pathway_impact: "Ligand-hypersensitive receptor overexpression".to_string(),
        resistance_profile:
            "High protein levels may require increased drug dosing or combination therapy"
                .to_string(),
        clinical_significance: format!(
            "{copies}x amplification - significant therapeutic challenge"
        ),
        affected_pathways: AMPLIFICATION_PATHWAYS.iter().map(|p| p.to_string()).collect(),
        resistance_score: t.amplification_score(copies),
        population_frequency: t.amplification_frequency,
    }
}

pub fn classify_unknown(descriptor: &MutationDescriptor, t: &Thresholds) -> MutationClassification {
    MutationClassification {
        kind: MutationKind::Unknown,
        mechanism: format!(
            "Unknown mechanism for {}: {}",
            descriptor.category, descriptor.detail
        ),
        pathway_impact: "Requires functional characterization".to_string(),
        resistance_profile: "Unknown - requires experimental validation".to_string(),
        clinical_significance: "Novel or rare mutation requiring further study".to_string(),
        affected_pathways: vec![UNKNOWN_PATHWAY.to_string()],
        resistance_score: t.unknown_score,
        population_frequency: t.unknown_frequency,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/classify.rs"]
mod tests;
