use clap::{Parser, Subcommand};

mod analyze;
mod cases;
mod classify;
mod knowledge;

#[derive(Parser, Debug)]
#[command(name = "kira-egfr", version, about = "Kira EGFR mutation analysis CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a CSV of mutations and write reports
    Analyze(analyze::AnalyzeArgs),
    /// Classify a single mutation
    Classify(classify::ClassifyArgs),
    /// Inspect the knowledge base
    Knowledge(knowledge::KnowledgeArgs),
    /// List or run bundled example cases
    Cases(cases::CasesArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Analyze(args) => analyze::handle(args),
            Command::Classify(args) => classify::handle(args),
            Command::Knowledge(args) => knowledge::handle(args),
            Command::Cases(args) => cases::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
