use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::knowledge::KnowledgeBase;

#[derive(Args, Debug)]
pub struct KnowledgeArgs {
    /// Optional knowledge base TOML replacing the builtin one
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    #[command(subcommand)]
    command: KnowledgeCommand,
}

#[derive(Subcommand, Debug)]
enum KnowledgeCommand {
    List,
    Dump(KnowledgeDumpArgs),
}

#[derive(Args, Debug)]
pub struct KnowledgeDumpArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: KnowledgeArgs) -> anyhow::Result<()> {
    let kb = KnowledgeBase::load(args.knowledge.as_deref())?;
    match args.command {
        KnowledgeCommand::List => list_knowledge(&kb),
        KnowledgeCommand::Dump(dump) => dump_knowledge(&kb, dump),
    }
}

fn list_knowledge(kb: &KnowledgeBase) -> anyhow::Result<()> {
    println!("mutation\tkind\tresistance_score\tpopulation_frequency");
    for m in &kb.mutations {
        println!(
            "{}\t{}\t{:.2}\t{:.2}",
            m.id,
            m.kind.as_str(),
            m.resistance_score,
            m.population_frequency
        );
    }
    println!();
    println!("drug_class\tdrugs\tapproval_year\teffective_against\tresistant_against");
    for class in kb.drug_classes() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            class.name,
            class.drugs.join(","),
            class
                .approval_year
                .map_or_else(|| ".".to_string(), |y| y.to_string()),
            class.effective_against.join(","),
            class.resistant_against.join(",")
        );
    }
    Ok(())
}

fn dump_knowledge(kb: &KnowledgeBase, args: KnowledgeDumpArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let json = serde_json::to_string_pretty(kb)?;
    let path = args.out.join("knowledge_manifest.json");
    std::fs::write(path, json)?;
    Ok(())
}
