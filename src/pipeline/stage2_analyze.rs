use crate::aggregate::session::AnalysisSession;
use crate::engine::Engine;
use crate::model::classification::MutationKind;
use crate::model::descriptor::MutationDescriptor;

/// Replaces the session contents with the analyzed batch.
pub fn run_stage2_analyze(
    engine: &Engine<'_>,
    descriptors: &[MutationDescriptor],
    session: &mut AnalysisSession,
) -> usize {
    session.replace_with(engine, descriptors);
    for kind in MutationKind::ordered() {
        let count = session
            .records()
            .iter()
            .filter(|r| r.classification.kind == *kind)
            .count();
        tracing::info!(kind = kind.as_str(), count);
    }
    session.len()
}
