use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RepzError, Result};
use crate::model::Dataset;
use crate::store::{fs as fs_store, DataStore};

/// Appends every row of an external CSV file to the dataset and
/// persists. The file must carry the canonical header; on any failure
/// the dataset is left as it was.
pub fn run<S: DataStore>(store: &mut S, dataset: &mut Dataset, path: &Path) -> Result<CmdResult> {
    if !path.is_file() {
        return Err(RepzError::NotFound(path.display().to_string()));
    }

    let incoming = fs_store::read_entries(path)?;
    let count = incoming.len();

    let mut entries = dataset.entries.clone();
    entries.extend(incoming.iter().cloned());
    store.save_entries(&dataset.name, &entries)?;
    dataset.entries = entries;

    let mut result = CmdResult::default().with_affected_entries(incoming);
    let report = format!("Merged {} rows from {}", count, path.display());
    if count == 0 {
        // A header-only source is legal but probably not what the user meant
        result.add_message(CmdMessage::warning(report));
    } else {
        result.add_message(CmdMessage::success(report));
    }
    Ok(result)
}
