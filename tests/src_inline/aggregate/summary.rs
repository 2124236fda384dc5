use super::*;
use crate::engine::Engine;
use crate::knowledge::KnowledgeBase;
use crate::model::descriptor::MutationDescriptor;

fn records(kb: &KnowledgeBase, input: &[(&str, &str)]) -> Vec<AnalysisRecord> {
    let engine = Engine::new(kb);
    input
        .iter()
        .map(|(c, d)| engine.analyze(&MutationDescriptor::new(*c, *d, "x")))
        .collect()
}

#[test]
fn empty_summary() {
    let s = summarize(&[], &Thresholds::default());
    assert_eq!(s.total_mutations, 0);
    assert!(s.average_resistance_score.is_none());
    assert_eq!(s.high_resistance_count, 0);
    assert!(s.drug_efficacy.is_empty());
    assert!(s.affected_pathways.is_empty());
    assert_eq!(s.kind_counts.get("unknown"), Some(&0));
}

#[test]
fn high_resistance_is_strictly_above_cutoff() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    // T790M 0.8, Exon 20 ins 0.75, amplification 20 capped at 0.7
    let recs = records(
        &kb,
        &[
            ("Point Mutation", "T790M"),
            ("Insertion", "Exon 20 ins"),
            ("Amplification", "20"),
        ],
    );
    let s = summarize(&recs, &kb.thresholds);
    assert_eq!(s.high_resistance_count, 2);
    assert_eq!(s.kind_counts.get("resistance"), Some(&2));
    assert_eq!(s.kind_counts.get("amplification"), Some(&1));
}

#[test]
fn pathway_union_is_sorted_and_deduplicated() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    let recs = records(
        &kb,
        &[
            ("Point Mutation", "G719X"),
            ("Amplification", "6"),
            ("Point Mutation", "novel"),
        ],
    );
    let s = summarize(&recs, &kb.thresholds);
    assert_eq!(
        s.affected_pathways,
        vec!["JAK/STAT", "MAPK/ERK", "PI3K/AKT", "Unknown"]
    );
}

#[test]
fn drug_tallies_keep_first_seen_order() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    let recs = records(&kb, &[("Deletion", "Del19"), ("Point Mutation", "T790M")]);
    let tallies = drug_tallies(&recs);
    assert_eq!(tallies.len(), 7);
    assert_eq!(tallies[0].drug, "Gefitinib (1st Generation TKI)");
    assert_eq!(tallies[0].high, 1);
    assert_eq!(tallies[0].low, 1);
    assert_eq!(tallies[0].total, 2);
    let cetuximab = tallies
        .iter()
        .find(|t| t.drug == "Cetuximab (Monoclonal Antibody)")
        .expect("cetuximab");
    assert_eq!(cetuximab.medium, 2);
}

#[test]
fn resistance_series_uses_insertion_order() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    let recs = records(&kb, &[("Amplification", "4"), ("Amplification", "8")]);
    let s = summarize(&recs, &kb.thresholds);
    assert_eq!(s.resistance_series.len(), 2);
    assert_eq!(s.resistance_series[1].index, 1);
    assert_eq!(s.resistance_series[1].detail, "8");
    assert!((s.resistance_series[0].resistance_score - 0.4).abs() < 1e-9);
    assert!((average_score(&recs).expect("avg") - 0.5).abs() < 1e-9);
}

#[test]
fn empty_session_has_no_overall_risk() {
    let s = summarize(&[], &Thresholds::default());
    assert!(s.overall_risk.is_none());
    assert!(s.resistance_series.is_empty());
}

#[test]
fn overall_risk_follows_average() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    // (0.3 + 0.8) / 2 = 0.55
    let medium = summarize(
        &records(&kb, &[("Point Mutation", "L858R"), ("Point Mutation", "T790M")]),
        &kb.thresholds,
    );
    assert_eq!(medium.overall_risk, Some(RiskLevel::Medium));

    let low = summarize(&records(&kb, &[("Point Mutation", "L858R")]), &kb.thresholds);
    assert_eq!(low.overall_risk, Some(RiskLevel::Low));

    let high = summarize(
        &records(&kb, &[("Point Mutation", "T790M"), ("Insertion", "Exon 20 ins")]),
        &kb.thresholds,
    );
    assert_eq!(high.overall_risk, Some(RiskLevel::High));
}

#[test]
fn series_points_carry_record_risk() {
    let kb = KnowledgeBase::builtin().expect("builtin");
    // 0.4 sits on the medium cutoff, capped amplification 0.7 on the high one
    let recs = records(
        &kb,
        &[
            ("Amplification", "4"),
            ("Point Mutation", "novel"),
            ("Amplification", "20"),
            ("Point Mutation", "T790M"),
        ],
    );
    let s = summarize(&recs, &kb.thresholds);
    let risks: Vec<RiskLevel> = s.resistance_series.iter().map(|p| p.risk).collect();
    assert_eq!(
        risks,
        vec![RiskLevel::Low, RiskLevel::Medium, RiskLevel::Medium, RiskLevel::High]
    );
}
