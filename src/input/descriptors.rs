use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::input::{InputError, open_reader};
use crate::model::category::MutationCategory;
use crate::model::descriptor::MutationDescriptor;

pub const DEFAULT_CATEGORY: &str = "Point Mutation";
pub const DEFAULT_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    category: Option<usize>,
    mutation: Option<usize>,
    detail: Option<usize>,
    exon: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            category: find("type"),
            mutation: find("mutation"),
            detail: find("detail"),
            exon: find("exon"),
        }
    }
}

pub fn read_descriptors(path: &Path) -> Result<Vec<MutationDescriptor>, InputError> {
    let reader = open_reader(path)?;
    let descriptors = read_descriptors_from(reader)?;
    tracing::debug!(
        path = %path.display(),
        rows = descriptors.len(),
        "descriptors read"
    );
    Ok(descriptors)
}

/// Reads a headed CSV. `mutation` takes precedence over `detail`; empty
/// cells fall back to the column default.
pub fn read_descriptors_from<R: Read>(reader: R) -> Result<Vec<MutationDescriptor>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?);

    let mut out = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        if row.iter().all(|v| v.is_empty()) {
            continue;
        }
        let category = cell(&row, columns.category).unwrap_or(DEFAULT_CATEGORY);
        let detail = cell(&row, columns.mutation)
            .or_else(|| cell(&row, columns.detail))
            .unwrap_or("");
        let location = cell(&row, columns.exon).unwrap_or(DEFAULT_LOCATION);
        out.push(MutationDescriptor {
            category: MutationCategory::from_label(category),
            detail: detail.to_string(),
            location: location.to_string(),
        });
    }
    Ok(out)
}

fn cell(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i)).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/descriptors.rs"]
mod tests;
