use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::InputError;
use crate::input::descriptors::read_descriptors;
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::model::descriptor::MutationDescriptor;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct LoadContext {
    pub input_path: PathBuf,
    pub knowledge: KnowledgeBase,
    pub descriptors: Vec<MutationDescriptor>,
    pub unrecognized_categories: usize,
}

pub fn run_stage1(input: &Path, knowledge: Option<&Path>) -> Result<LoadContext, Stage1Error> {
    let kb = KnowledgeBase::load(knowledge)?;
    let descriptors = read_descriptors(input)?;
    let unrecognized_categories = descriptors
        .iter()
        .filter(|d| !d.category.is_recognized())
        .count();
    if unrecognized_categories > 0 {
        tracing::warn!(
            count = unrecognized_categories,
            "unrecognized mutation categories will be classified as unknown unless the detail is a known mutation"
        );
    }
    Ok(LoadContext {
        input_path: input.to_path_buf(),
        knowledge: kb,
        descriptors,
        unrecognized_categories,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
