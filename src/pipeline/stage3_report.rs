use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::aggregate::session::AnalysisSession;
use crate::aggregate::summary::SessionSummary;
use crate::knowledge::KnowledgeBase;
use crate::report::ReportError;
use crate::report::csv::{write_recommendations_tsv, write_results_csv};
use crate::report::json::write_summary;
use crate::report::text::render_report;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Report(#[from] ReportError),
}

pub fn run_stage3_report(
    session: &AnalysisSession,
    kb: &KnowledgeBase,
    out_dir: &Path,
) -> Result<SessionSummary, Stage3Error> {
    std::fs::create_dir_all(out_dir)?;

    let records = session.records();
    let summary = session.summary(&kb.thresholds);

    write_results_csv(BufWriter::new(File::create(out_dir.join("results.csv"))?), records)?;
    write_recommendations_tsv(
        BufWriter::new(File::create(out_dir.join("recommendations.tsv"))?),
        records,
    )?;
    write_summary(out_dir, &summary, records)?;
    std::fs::write(out_dir.join("report.txt"), render_report(&summary, records, kb))?;

    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
