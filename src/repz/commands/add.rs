use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Dataset;
use crate::schema;
use crate::store::DataStore;

/// Parses the raw fields into an entry, appends it to the dataset and
/// persists. On any failure the store and the in-memory table are left
/// untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    dataset: &mut Dataset,
    raw_fields: &[String],
) -> Result<CmdResult> {
    let entry = schema::parse_entry(raw_fields)?;

    let mut entries = dataset.entries.clone();
    entries.push(entry.clone());
    store.save_entries(&dataset.name, &entries)?;
    dataset.entries = entries;

    let mut result = CmdResult::default().with_affected_entries(vec![entry.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Added: {} {} {} {}",
        entry.exercise, entry.reps, entry.weight, entry.date
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepzError;
    use crate::store::memory::fixtures::StoreFixture;

    fn args(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut fixture = StoreFixture::new().with_dataset("data");
        let mut dataset = Dataset::new("data");

        let result = run(
            &mut fixture.store,
            &mut dataset,
            &args(&["Squat", "5", "225", "2025-05-19"]),
        )
        .unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        assert_eq!(result.affected_entries[0].exercise, "Squat");
        assert_eq!(dataset.entries.len(), 1);

        let stored = fixture.store.load_entries("data").unwrap();
        assert_eq!(stored, dataset.entries);
    }

    #[test]
    fn test_add_reports_the_new_row() {
        let mut fixture = StoreFixture::new().with_dataset("data");
        let mut dataset = Dataset::new("data");

        let result = run(
            &mut fixture.store,
            &mut dataset,
            &args(&["Bench Press", "8", "135.5", "2025-05-19"]),
        )
        .unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "Added: Bench Press 8 135.5 2025-05-19"
        );
    }

    #[test]
    fn test_add_parse_failure_leaves_everything_untouched() {
        let mut fixture = StoreFixture::new().with_entries(
            "data",
            vec![crate::store::memory::fixtures::entry(
                "Squat",
                5,
                225.0,
                "2025-05-19",
            )],
        );
        let mut dataset =
            Dataset::with_entries("data", fixture.store.load_entries("data").unwrap());

        let err = run(
            &mut fixture.store,
            &mut dataset,
            &args(&["Squat", "five", "225"]),
        )
        .unwrap_err();

        assert!(matches!(err, RepzError::InvalidNumber(..)));
        assert_eq!(dataset.entries.len(), 1);
        assert_eq!(fixture.store.load_entries("data").unwrap().len(), 1);
    }

    #[test]
    fn test_add_wrong_arity_is_rejected() {
        let mut fixture = StoreFixture::new().with_dataset("data");
        let mut dataset = Dataset::new("data");

        let err = run(&mut fixture.store, &mut dataset, &args(&["Squat", "5"])).unwrap_err();
        assert!(matches!(err, RepzError::Arity(2)));
    }
}
