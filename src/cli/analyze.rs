use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::aggregate::session::AnalysisSession;
use crate::aggregate::summary::SessionSummary;
use crate::engine::Engine;
use crate::knowledge::KnowledgeBase;
use crate::model::descriptor::MutationDescriptor;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_analyze::run_stage2_analyze;
use crate::pipeline::stage3_report::run_stage3_report;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input CSV with type, mutation/detail and exon columns (.csv or .csv.gz)
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,

    /// Optional knowledge base TOML replacing the builtin one
    #[arg(long)]
    pub(crate) knowledge: Option<PathBuf>,
}

pub fn handle(args: AnalyzeArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input, args.knowledge.as_deref())?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        mutations = ctx.descriptors.len(),
        unrecognized_categories = ctx.unrecognized_categories,
        "finished stage"
    );

    if ctx.descriptors.is_empty() {
        anyhow::bail!("no mutations found in {}", ctx.input_path.display());
    }

    analyze_and_report(&ctx.knowledge, &ctx.descriptors, &args.out)?;
    Ok(())
}

pub(crate) fn analyze_and_report(
    kb: &KnowledgeBase,
    descriptors: &[MutationDescriptor],
    out: &Path,
) -> anyhow::Result<SessionSummary> {
    let engine = Engine::new(kb);
    let mut session = AnalysisSession::new();

    let start = Instant::now();
    info!(stage = "stage2_analyze", "starting stage");
    let n = run_stage2_analyze(&engine, descriptors, &mut session);
    info!(
        stage = "stage2_analyze",
        elapsed_ms = start.elapsed().as_millis(),
        records = n,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_report", "starting stage");
    let summary = run_stage3_report(&session, kb, out)?;
    info!(
        stage = "stage3_report",
        elapsed_ms = start.elapsed().as_millis(),
        average_resistance = summary.average_resistance_score.unwrap_or(f64::NAN),
        high_resistance = summary.high_resistance_count,
        "finished stage"
    );
    Ok(summary)
}
