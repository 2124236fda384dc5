use std::path::PathBuf;

use clap::Args;

use crate::engine::Engine;
use crate::engine::narrative::narrative;
use crate::knowledge::KnowledgeBase;
use crate::model::descriptor::MutationDescriptor;
use crate::model::record::AnalysisRecord;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Mutation category, e.g. "Point Mutation" or "Amplification"
    #[arg(long, default_value = "Point Mutation")]
    pub(crate) category: String,

    /// Mutation identifier, or copy number for amplifications
    #[arg(long)]
    pub(crate) detail: String,

    /// Exon or location label
    #[arg(long, default_value = "Unknown")]
    pub(crate) location: String,

    /// Optional knowledge base TOML replacing the builtin one
    #[arg(long)]
    pub(crate) knowledge: Option<PathBuf>,

    /// Print the analysis record as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub fn handle(args: ClassifyArgs) -> anyhow::Result<()> {
    let kb = KnowledgeBase::load(args.knowledge.as_deref())?;
    let engine = Engine::new(&kb);
    let descriptor = MutationDescriptor::new(args.category.as_str(), args.detail, args.location);
    let record = engine.analyze(&descriptor);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_record(&record));
    }
    Ok(())
}

fn render_record(record: &AnalysisRecord) -> String {
    let c = &record.classification;
    let detail = narrative(c);
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} ({})\n",
        record.descriptor.category, record.descriptor.detail, record.descriptor.location
    ));
    out.push_str(&format!("classification\t{}\n", c.kind.as_str()));
    out.push_str(&format!("resistance_score\t{:.2}\n", c.resistance_score));
    out.push_str(&format!("affected_pathways\t{}\n\n", c.affected_pathways.join(",")));
    out.push_str(&detail.mechanism);
    out.push_str("\n\n");
    out.push_str(&detail.clinical);
    out.push_str("\n\ndrug\tclass\tefficacy\trationale\n");
    for rec in &record.recommendations {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            rec.drug_name, rec.drug_class, rec.efficacy, rec.rationale
        ));
    }
    out
}
