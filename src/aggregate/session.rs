use serde::Serialize;

use crate::aggregate::summary::{SessionSummary, summarize};
use crate::engine::Engine;
use crate::model::descriptor::MutationDescriptor;
use crate::model::record::AnalysisRecord;
use crate::model::thresholds::Thresholds;

/// Ordered, append-only list of analysis records owned by one caller.
///
/// Records are never edited in place; `clear` and `replace_with` are the
/// only ways to drop them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AnalysisSession {
    records: Vec<AnalysisRecord>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    pub fn analyze(&mut self, engine: &Engine<'_>, descriptor: &MutationDescriptor) -> &AnalysisRecord {
        let idx = self.records.len();
        self.records.push(engine.analyze(descriptor));
        &self.records[idx]
    }

    pub fn extend(&mut self, engine: &Engine<'_>, descriptors: &[MutationDescriptor]) {
        self.records.reserve(descriptors.len());
        for d in descriptors {
            self.records.push(engine.analyze(d));
        }
    }

    /// Drops the current records and analyzes a fresh batch.
    pub fn replace_with(&mut self, engine: &Engine<'_>, descriptors: &[MutationDescriptor]) {
        self.clear();
        self.extend(engine, descriptors);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self, thresholds: &Thresholds) -> SessionSummary {
        summarize(&self.records, thresholds)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/session.rs"]
mod tests;
