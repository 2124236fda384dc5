use super::*;
use crate::aggregate::summary::summarize;
use crate::engine::Engine;
use crate::model::descriptor::MutationDescriptor;

fn setup(input: &[(&str, &str)]) -> (KnowledgeBase, Vec<AnalysisRecord>) {
    let kb = KnowledgeBase::builtin().expect("builtin");
    let records: Vec<AnalysisRecord> = {
        let engine = Engine::new(&kb);
        input
            .iter()
            .map(|(c, d)| engine.analyze(&MutationDescriptor::new(*c, *d, "Exon 21")))
            .collect()
    };
    (kb, records)
}

#[test]
fn digest_lists_scores() {
    let (kb, records) = setup(&[("Point Mutation", "L858R"), ("Point Mutation", "T790M")]);
    let summary = summarize(&records, &kb.thresholds);
    let text = render_digest(&summary, &records);
    assert!(text.contains("Total Mutations: 2"));
    assert!(text.contains("Average Resistance Score: 0.55"));
    assert!(text.contains("High Resistance Cases: 1"));
    assert!(text.contains("L858R: 0.30 resistance score"));
    assert!(text.contains("T790M: 0.80 resistance score"));
    assert!(text.contains("Overall Risk: Medium"));
    assert!(text.contains("L858R: 0.30 resistance score (Low risk)"));
    assert!(text.contains("T790M: 0.80 resistance score (High risk)"));
}

#[test]
fn digest_for_empty_session() {
    let summary = summarize(&[], &crate::model::thresholds::Thresholds::default());
    let text = render_digest(&summary, &[]);
    assert!(text.contains("Average Resistance Score: n/a"));
    assert!(text.contains("Overall Risk: n/a"));
}

#[test]
fn report_sections_and_trials() {
    let (kb, records) = setup(&[("Deletion", "Del19")]);
    let summary = summarize(&records, &kb.thresholds);
    let text = render_report(&summary, &records, &kb);
    assert!(text.starts_with("EGFR Mutation Resistance Analysis Report"));
    assert!(text.contains("Mutation 1: Deletion - Del19"));
    assert!(text.contains("- Resistance Score: 0.20/1.0"));
    assert!(text.contains("Gefitinib\t1st Generation TKI\tHigh\t"));
    // Afatinib and Osimertinib are High for Del19
    assert!(text.contains("- FLAURA (Osimertinib)"));
    assert!(text.contains("- LUX-Lung 3 (Afatinib)"));
    assert!(text.contains("- Risk Tier: Low"));
    assert!(text.contains("Limitations:"));
}

#[test]
fn report_prints_considerations_and_references() {
    let (kb, records) = setup(&[("Point Mutation", "T790M")]);
    let summary = summarize(&records, &kb.thresholds);
    let text = render_report(&summary, &records, &kb);
    assert!(text.contains("- Risk Tier: High"));
    assert!(text.contains("Key clinical considerations:\n- Monitor for acquired resistance"));
    assert!(text.contains("\nReferences:\n1. Sharma SV"));
    assert!(text.contains("\n4. Yun CH"));
    let considerations = text.find("Key clinical considerations:").expect("considerations");
    let limitations = text.find("Limitations:").expect("limitations");
    let references = text.find("References:").expect("references");
    assert!(considerations < limitations && limitations < references);
}

#[test]
fn report_skips_empty_note_sections() {
    let (mut kb, records) = setup(&[("Point Mutation", "L858R")]);
    kb.report.considerations.clear();
    kb.report.references.clear();
    let summary = summarize(&records, &kb.thresholds);
    let text = render_report(&summary, &records, &kb);
    assert!(!text.contains("Key clinical considerations:"));
    assert!(!text.contains("References:"));
    assert!(text.contains("Limitations:"));
}

#[test]
fn report_omits_trials_without_high_efficacy() {
    let (kb, records) = setup(&[("Point Mutation", "T790M")]);
    let summary = summarize(&records, &kb.thresholds);
    let text = render_report(&summary, &records, &kb);
    assert!(!text.contains("Supporting trials:"));
}

#[test]
fn truncate_long_rationale() {
    assert_eq!(truncate("short", 50), "short");
    let long = "a".repeat(60);
    let t = truncate(&long, 50);
    assert_eq!(t.len(), 53);
    assert!(t.ends_with("..."));
}
