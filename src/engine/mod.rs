//! Classification and drug recommendation over a static knowledge base.
//!
//! Every operation here is total: malformed descriptors degrade to the
//! unknown classification and unmatched drugs default to `Medium`.

pub mod classify;
pub mod narrative;
pub mod recommend;

use crate::knowledge::KnowledgeBase;
use crate::model::descriptor::MutationDescriptor;
use crate::model::record::AnalysisRecord;
use crate::model::thresholds::Thresholds;

#[derive(Debug, Clone, Copy)]
pub struct Engine<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> Engine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    pub fn thresholds(&self) -> &'kb Thresholds {
        &self.kb.thresholds
    }

    pub fn analyze(&self, descriptor: &MutationDescriptor) -> AnalysisRecord {
        let classification = self.classify(descriptor);
        let recommendations = self.recommend(&descriptor.detail, &classification);
        AnalysisRecord {
            descriptor: descriptor.clone(),
            classification,
            recommendations,
        }
    }

    pub fn analyze_all(&self, descriptors: &[MutationDescriptor]) -> Vec<AnalysisRecord> {
        descriptors.iter().map(|d| self.analyze(d)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/mod.rs"]
mod tests;
