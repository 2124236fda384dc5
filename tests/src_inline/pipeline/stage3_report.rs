use super::*;
use crate::engine::Engine;
use crate::model::descriptor::MutationDescriptor;
use crate::pipeline::stage2_analyze::run_stage2_analyze;
use tempfile::tempdir;

#[test]
fn writes_all_outputs() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    let n = run_stage2_analyze(
        &engine,
        &[
            MutationDescriptor::new("Point Mutation", "L858R", "Exon 21"),
            MutationDescriptor::new("Point Mutation", "T790M", "Exon 20"),
        ],
        &mut session,
    );
    assert_eq!(n, 2);

    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let summary = run_stage3_report(&session, &kb, &out).expect("stage3");
    assert_eq!(summary.total_mutations, 2);

    for name in ["results.csv", "recommendations.tsv", "summary.json", "report.txt"] {
        assert!(out.join(name).is_file(), "{name}");
    }

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("summary.json")).expect("read"))
            .expect("json");
    assert_eq!(json["tool"]["name"], "kira-egfr");
    assert_eq!(json["summary"]["total_mutations"], 2);
    assert_eq!(json["records"][1]["descriptor"]["detail"], "T790M");
    let avg = json["summary"]["average_resistance_score"]
        .as_f64()
        .expect("avg");
    assert!((avg - 0.55).abs() < 1e-9);

    let results = std::fs::read_to_string(out.join("results.csv")).expect("read");
    assert_eq!(results.lines().count(), 3);
}

#[test]
fn stage2_replaces_previous_records() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    let engine = Engine::new(&kb);
    let mut session = AnalysisSession::new();
    run_stage2_analyze(
        &engine,
        &[MutationDescriptor::new("Deletion", "Del19", "Exon 19")],
        &mut session,
    );
    run_stage2_analyze(
        &engine,
        &[MutationDescriptor::new("Amplification", "8", "Whole Gene")],
        &mut session,
    );
    assert_eq!(session.len(), 1);
    assert_eq!(session.records()[0].descriptor.detail, "8");
}
