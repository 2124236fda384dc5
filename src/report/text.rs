use crate::aggregate::summary::SessionSummary;
use crate::knowledge::KnowledgeBase;
use crate::model::efficacy::Efficacy;
use crate::model::record::AnalysisRecord;

const RATIONALE_WIDTH: usize = 50;

/// Short plain-text digest: counts, average and one score line per mutation.
pub fn render_digest(summary: &SessionSummary, records: &[AnalysisRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total Mutations: {}\n", summary.total_mutations));
    match summary.average_resistance_score {
        Some(avg) => out.push_str(&format!("Average Resistance Score: {avg:.2}\n")),
        None => out.push_str("Average Resistance Score: n/a\n"),
    }
    out.push_str(&format!(
        "High Resistance Cases: {}\n",
        summary.high_resistance_count
    ));
    match summary.overall_risk {
        Some(risk) => out.push_str(&format!("Overall Risk: {risk}\n")),
        None => out.push_str("Overall Risk: n/a\n"),
    }
    out.push('\n');
    for (r, point) in records.iter().zip(&summary.resistance_series) {
        out.push_str(&format!(
            "{}: {:.2} resistance score ({} risk)\n",
            r.descriptor.detail, r.classification.resistance_score, point.risk
        ));
    }
    out
}

pub fn render_report(
    summary: &SessionSummary,
    records: &[AnalysisRecord],
    kb: &KnowledgeBase,
) -> String {
    let mut out = String::new();
    out.push_str("EGFR Mutation Resistance Analysis Report\n");
    out.push_str("========================================\n\n");
    out.push_str("This report applies a curated rule table to the submitted mutations. ");
    out.push_str("It is not a variant caller and should be interpreted conservatively.\n\n");

    out.push_str("Executive summary:\n");
    out.push_str(&format!(
        "- {} EGFR mutation(s) analyzed; {} show high resistance potential (score > {:.1}).\n",
        summary.total_mutations, summary.high_resistance_count, kb.thresholds.high_resistance_above
    ));
    out.push('\n');
    out.push_str(&render_digest(summary, records));
    out.push('\n');

    out.push_str("Detailed mutation analysis:\n");
    for (i, r) in records.iter().enumerate() {
        let c = &r.classification;
        out.push_str(&format!(
            "\nMutation {}: {} - {}\n",
            i + 1,
            r.descriptor.category,
            r.descriptor.detail
        ));
        out.push_str(&format!("- Location: {}\n", r.descriptor.location));
        out.push_str(&format!("- Classification: {}\n", c.kind.as_str()));
        out.push_str(&format!("- Mechanism: {}\n", c.mechanism));
        out.push_str(&format!("- Pathway Impact: {}\n", c.pathway_impact));
        out.push_str(&format!("- Resistance Score: {:.2}/1.0\n", c.resistance_score));
        out.push_str(&format!(
            "- Risk Tier: {}\n",
            kb.thresholds.record_risk(c.resistance_score)
        ));
        out.push_str(&format!("- Resistance Profile: {}\n", c.resistance_profile));
        out.push_str(&format!("- Clinical Significance: {}\n", c.clinical_significance));
        out.push_str(&format!(
            "- Affected Pathways: {}\n",
            c.affected_pathways.join(", ")
        ));
    }
    out.push('\n');

    out.push_str("Treatment recommendations:\n");
    out.push_str("Drug\tClass\tEfficacy\tRationale\n");
    for rec in records.iter().flat_map(|r| r.recommendations.iter()) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            rec.drug_name,
            rec.drug_class,
            rec.efficacy,
            truncate(&rec.rationale, RATIONALE_WIDTH)
        ));
    }
    out.push('\n');

    let mut trial_lines = Vec::new();
    for rec in records
        .iter()
        .flat_map(|r| r.recommendations_with(Efficacy::High))
    {
        for trial in kb.trials_for_drug(&rec.drug_name) {
            let line = format!(
                "- {} ({}): {} in {}, {}",
                trial.name, trial.drug, trial.primary_endpoint, trial.population, trial.result
            );
            if !trial_lines.contains(&line) {
                trial_lines.push(line);
            }
        }
    }
    if !trial_lines.is_empty() {
        out.push_str("Supporting trials:\n");
        for line in trial_lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    if !summary.affected_pathways.is_empty() {
        out.push_str(&format!(
            "Affected pathways: {}\n\n",
            summary.affected_pathways.join(", ")
        ));
    }

    if !kb.report.considerations.is_empty() {
        out.push_str("Key clinical considerations:\n");
        for item in &kb.report.considerations {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }

    out.push_str("Limitations:\n");
    out.push_str("- Scores come from a static knowledge base and do not cover every resistance mechanism.\n");
    out.push_str("- Clinical correlation and multidisciplinary review are required before any treatment decision.\n");

    if !kb.report.references.is_empty() {
        out.push_str("\nReferences:\n");
        for (i, reference) in kb.report.references.iter().enumerate() {
            out.push_str(&format!("{}. {reference}\n", i + 1));
        }
    }
    out
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let head: String = s.chars().take(width).collect();
    format!("{head}...")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
