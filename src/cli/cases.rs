use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::info;

use crate::cli::analyze::analyze_and_report;
use crate::knowledge::KnowledgeBase;

#[derive(Args, Debug)]
pub struct CasesArgs {
    #[command(subcommand)]
    command: CasesCommand,
}

#[derive(Subcommand, Debug)]
enum CasesCommand {
    List,
    Run(CasesRunArgs),
}

#[derive(Args, Debug)]
pub struct CasesRunArgs {
    /// Case name as shown by `cases list`
    name: String,

    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: CasesArgs) -> anyhow::Result<()> {
    let kb = KnowledgeBase::builtin()?;
    match args.command {
        CasesCommand::List => {
            println!("case\tn_mutations\tdescription");
            for case in kb.cases() {
                println!(
                    "{}\t{}\t{}",
                    case.name,
                    case.mutations.len(),
                    case.description
                );
            }
            Ok(())
        }
        CasesCommand::Run(run) => {
            let Some(case) = kb.case(&run.name) else {
                anyhow::bail!("unknown case: {}", run.name);
            };
            info!(case = case.name.as_str(), mutations = case.mutations.len(), "running case");
            analyze_and_report(&kb, &case.mutations, &run.out)?;
            Ok(())
        }
    }
}
