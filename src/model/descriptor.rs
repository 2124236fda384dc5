use serde::{Deserialize, Serialize};

use crate::model::category::MutationCategory;

/// One mutation as submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationDescriptor {
    pub category: MutationCategory,
    pub detail: String,
    /// Exon or location label. Carried through, never interpreted.
    pub location: String,
}

impl MutationDescriptor {
    pub fn new(
        category: impl Into<MutationCategory>,
        detail: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            detail: detail.into(),
            location: location.into(),
        }
    }
}
