use super::*;
use crate::knowledge::KnowledgeBase;

fn kb() -> KnowledgeBase {
    KnowledgeBase::builtin().expect("builtin")
}

#[test]
fn analyze_appends_in_order() {
    let kb = kb();
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    assert!(session.is_empty());

    let first = session.analyze(&engine, &MutationDescriptor::new("Point Mutation", "G719X", "Exon 18"));
    assert_eq!(first.descriptor.detail, "G719X");
    session.analyze(&engine, &MutationDescriptor::new("Amplification", "4", "Whole Gene"));

    let details: Vec<&str> = session.records().iter().map(|r| r.descriptor.detail.as_str()).collect();
    assert_eq!(details, vec!["G719X", "4"]);
    assert_eq!(session.len(), 2);
}

#[test]
fn clear_resets_everything() {
    let kb = kb();
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    session.extend(
        &engine,
        &[
            MutationDescriptor::new("Point Mutation", "L858R", "Exon 21"),
            MutationDescriptor::new("Point Mutation", "T790M", "Exon 20"),
        ],
    );
    assert_eq!(session.len(), 2);
    session.clear();
    assert!(session.is_empty());
    let summary = session.summary(&kb.thresholds);
    assert_eq!(summary.total_mutations, 0);
    assert!(summary.average_resistance_score.is_none());
}

#[test]
fn replace_with_drops_previous_batch() {
    let kb = kb();
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    session.analyze(&engine, &MutationDescriptor::new("Point Mutation", "L858R", "Exon 21"));
    session.replace_with(
        &engine,
        &[MutationDescriptor::new("Deletion", "Del19", "Exon 19")],
    );
    assert_eq!(session.len(), 1);
    assert_eq!(session.records()[0].descriptor.detail, "Del19");
}

#[test]
fn push_accepts_prebuilt_records() {
    let kb = kb();
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    let record = engine.analyze(&MutationDescriptor::new("Insertion", "Exon 20 ins", "Exon 20"));
    session.push(record.clone());
    assert_eq!(session.records()[0], record);
}

#[test]
fn serializes_as_record_list() {
    let kb = kb();
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    session.analyze(&engine, &MutationDescriptor::new("Point Mutation", "L858R", "Exon 21"));
    let value = serde_json::to_value(&session).expect("json");
    assert!(value.is_array());
    assert_eq!(value[0]["descriptor"]["category"], "Point Mutation");
    assert_eq!(value[0]["classification"]["kind"], "activating");
}
