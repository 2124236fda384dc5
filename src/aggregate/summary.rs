use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::classification::MutationKind;
use crate::model::efficacy::Efficacy;
use crate::model::record::AnalysisRecord;
use crate::model::risk::RiskLevel;
use crate::model::thresholds::Thresholds;

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub total_mutations: usize,
    pub average_resistance_score: Option<f64>,
    /// `None` for an empty session, like the average.
    pub overall_risk: Option<RiskLevel>,
    pub high_resistance_count: usize,
    pub kind_counts: BTreeMap<String, usize>,
    pub drug_efficacy: Vec<DrugTally>,
    /// Union across all records; used to highlight pathway nodes.
    pub affected_pathways: Vec<String>,
    pub resistance_series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugTally {
    pub drug: String,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub index: usize,
    pub detail: String,
    pub resistance_score: f64,
    pub risk: RiskLevel,
}

pub fn summarize(records: &[AnalysisRecord], t: &Thresholds) -> SessionSummary {
    let total = records.len();
    let average = average_score(records);

    SessionSummary {
        total_mutations: total,
        average_resistance_score: average,
        overall_risk: average.map(|avg| t.session_risk(avg)),
        high_resistance_count: records
            .iter()
            .filter(|r| r.resistance_score() > t.high_resistance_above)
            .count(),
        kind_counts: kind_counts(records),
        drug_efficacy: drug_tallies(records),
        affected_pathways: pathway_union(records),
        resistance_series: records
            .iter()
            .enumerate()
            .map(|(index, r)| SeriesPoint {
                index,
                detail: r.descriptor.detail.clone(),
                resistance_score: r.resistance_score(),
                risk: t.record_risk(r.resistance_score()),
            })
            .collect(),
    }
}

pub fn average_score(records: &[AnalysisRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.resistance_score()).sum();
    Some(sum / records.len() as f64)
}

fn kind_counts(records: &[AnalysisRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for kind in MutationKind::ordered() {
        let c = records
            .iter()
            .filter(|r| r.classification.kind == *kind)
            .count();
        counts.insert(kind.as_str().to_string(), c);
    }
    counts
}

/// Tallies keep first-seen order of "Drug (Class)" keys.
pub fn drug_tallies(records: &[AnalysisRecord]) -> Vec<DrugTally> {
    let mut tallies: Vec<DrugTally> = Vec::new();
    for rec in records.iter().flat_map(|r| r.recommendations.iter()) {
        let key = format!("{} ({})", rec.drug_name, rec.drug_class);
        let pos = match tallies.iter().position(|t| t.drug == key) {
            Some(p) => p,
            None => {
                tallies.push(DrugTally {
                    drug: key,
                    high: 0,
                    medium: 0,
                    low: 0,
                    total: 0,
                });
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[pos];
        match rec.efficacy {
            Efficacy::High => tally.high += 1,
            Efficacy::Medium => tally.medium += 1,
            Efficacy::Low => tally.low += 1,
        }
        tally.total += 1;
    }
    tallies
}

fn pathway_union(records: &[AnalysisRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.classification.affected_pathways.iter().map(|p| p.as_str()))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/summary.rs"]
mod tests;
