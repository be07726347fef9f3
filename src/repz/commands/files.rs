use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Lists the datasets the store knows about.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let names = store.list_dataset_names()?;

    let mut result = CmdResult::default().with_listed_names(names);
    if result.listed_names.is_empty() {
        result.add_message(CmdMessage::info("No datasets found."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_files_lists_every_dataset() {
        let fixture = StoreFixture::new()
            .with_dataset("data")
            .with_dataset("cycling");

        let result = run(&fixture.store).unwrap();
        assert_eq!(result.listed_names, vec!["cycling", "data"]);
    }

    #[test]
    fn test_files_on_empty_store_reports_none() {
        let fixture = StoreFixture::new();

        let result = run(&fixture.store).unwrap();
        assert!(result.listed_names.is_empty());
        assert_eq!(result.messages[0].content, "No datasets found.");
    }
}
