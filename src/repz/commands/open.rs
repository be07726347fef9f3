use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RepzError, Result};
use crate::model::Dataset;
use crate::store::DataStore;

/// Loads an existing dataset and hands it back for the session to adopt.
/// Opening a name the store does not know is an error, not a create.
pub fn run<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    if !store.dataset_exists(name) {
        return Err(RepzError::NotFound(name.to_string()));
    }

    let entries = store.load_entries(name)?;
    let dataset = Dataset::with_entries(name, entries);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Opened dataset '{}' ({} rows)",
        dataset.name,
        dataset.len()
    )));
    Ok(result.with_dataset(dataset))
}
