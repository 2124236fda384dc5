use std::path::Path;

use serde::Serialize;

use crate::aggregate::summary::SessionSummary;
use crate::model::record::AnalysisRecord;
use crate::report::ReportError;

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

impl ToolSummary {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub tool: ToolSummary,
    pub summary: &'a SessionSummary,
    pub records: &'a [AnalysisRecord],
}

pub fn render_json(summary: &SessionSummary, records: &[AnalysisRecord]) -> Result<String, ReportError> {
    let report = JsonReport {
        tool: ToolSummary::current(),
        summary,
        records,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn write_summary(
    out_dir: &Path,
    summary: &SessionSummary,
    records: &[AnalysisRecord],
) -> Result<(), ReportError> {
    let json = render_json(summary, records)?;
    std::fs::write(out_dir.join("summary.json"), json)?;
    Ok(())
}
