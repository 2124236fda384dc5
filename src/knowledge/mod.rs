pub mod defs;
pub mod loader;

pub use defs::{
    CaseEntry, DrugClassEntry, DrugModality, KnowledgeBase, MutationEntry, ReportNotes,
    TrialEntry,
};
pub use loader::KnowledgeError;
