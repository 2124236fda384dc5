pub mod aggregate;
pub mod cli;
pub mod engine;
pub mod input;
pub mod knowledge;
pub mod model;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::aggregate::session::AnalysisSession;
    pub use crate::aggregate::summary::SessionSummary;
    pub use crate::engine::Engine;
    pub use crate::knowledge::KnowledgeBase;
    pub use crate::model::category::MutationCategory;
    pub use crate::model::classification::{MutationClassification, MutationKind};
    pub use crate::model::descriptor::MutationDescriptor;
    pub use crate::model::efficacy::Efficacy;
    pub use crate::model::record::{AnalysisRecord, DrugRecommendation};
}
