use std::io::Write;

use serde::Serialize;

use crate::model::record::AnalysisRecord;
use crate::report::ReportError;

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    #[serde(rename = "Mutation_Type")]
    mutation_type: &'a str,
    #[serde(rename = "Mutation_Detail")]
    mutation_detail: &'a str,
    #[serde(rename = "Exon")]
    exon: &'a str,
    #[serde(rename = "Resistance_Score")]
    resistance_score: f64,
    #[serde(rename = "Mechanism")]
    mechanism: &'a str,
    #[serde(rename = "Clinical_Significance")]
    clinical_significance: &'a str,
}

/// Flattened one-row-per-mutation export.
pub fn write_results_csv<W: Write>(writer: W, records: &[AnalysisRecord]) -> Result<(), ReportError> {
    let mut w = ::csv::Writer::from_writer(writer);
    if records.is_empty() {
        w.write_record([
            "Mutation_Type",
            "Mutation_Detail",
            "Exon",
            "Resistance_Score",
            "Mechanism",
            "Clinical_Significance",
        ])?;
    }
    for r in records {
        w.serialize(ResultRow {
            mutation_type: r.descriptor.category.as_str(),
            mutation_detail: &r.descriptor.detail,
            exon: &r.descriptor.location,
            resistance_score: r.classification.resistance_score,
            mechanism: &r.classification.mechanism,
            clinical_significance: &r.classification.clinical_significance,
        })?;
    }
    w.flush()?;
    Ok(())
}

/// One row per (mutation, drug) pair, in record then recommendation order.
pub fn write_recommendations_tsv<W: Write>(
    writer: W,
    records: &[AnalysisRecord],
) -> Result<(), ReportError> {
    let mut w = ::csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    w.write_record([
        "index",
        "mutation_detail",
        "drug",
        "drug_class",
        "efficacy",
        "rationale",
    ])?;
    for (idx, r) in records.iter().enumerate() {
        for rec in &r.recommendations {
            w.write_record([
                idx.to_string().as_str(),
                r.descriptor.detail.as_str(),
                rec.drug_name.as_str(),
                rec.drug_class.as_str(),
                rec.efficacy.as_str(),
                rec.rationale.as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
