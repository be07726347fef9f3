use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Dataset, Entry};
use crate::schema::Column;
use crate::store::DataStore;

/// Sorts the dataset by the named column, descending, and persists the
/// new order. Ties keep their previous relative order.
pub fn run<S: DataStore>(
    store: &mut S,
    dataset: &mut Dataset,
    column_name: &str,
) -> Result<CmdResult> {
    let column = Column::parse(column_name)?;

    let mut entries = dataset.entries.clone();
    sort_entries(&mut entries, column);
    store.save_entries(&dataset.name, &entries)?;
    dataset.entries = entries;

    let mut result = CmdResult::default().with_listed_entries(dataset.entries.clone());
    result.add_message(CmdMessage::info(format!(
        "Sorted by {} (descending).",
        column.name()
    )));
    Ok(result)
}

fn sort_entries(entries: &mut [Entry], column: Column) {
    // Vec::sort_by is stable, which is what keeps ties in source order.
    match column {
        Column::Exercise => entries.sort_by(|a, b| b.exercise.cmp(&a.exercise)),
        Column::Reps => entries.sort_by(|a, b| b.reps.cmp(&a.reps)),
        Column::Weight => entries.sort_by(|a, b| b.weight.total_cmp(&a.weight)),
        Column::Date => entries.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepzError;
    use crate::store::memory::fixtures::{entry, StoreFixture};

    fn fixture() -> (StoreFixture, Dataset) {
        let entries = vec![
            entry("Bench Press", 8, 135.0, "2025-05-19"),
            entry("Squat", 5, 225.0, "2025-05-21"),
            entry("Row", 10, 95.0, "2025-05-20"),
        ];
        let fixture = StoreFixture::new().with_entries("data", entries.clone());
        (fixture, Dataset::with_entries("data", entries))
    }

    #[test]
    fn test_sort_by_weight_descending() {
        let (mut fixture, mut dataset) = fixture();

        let result = run(&mut fixture.store, &mut dataset, "weight").unwrap();

        let weights: Vec<f64> = result.listed_entries.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![225.0, 135.0, 95.0]);
    }

    #[test]
    fn test_sort_persists_the_new_order() {
        let (mut fixture, mut dataset) = fixture();

        run(&mut fixture.store, &mut dataset, "date").unwrap();

        let stored = fixture.store.load_entries("data").unwrap();
        assert_eq!(stored, dataset.entries);
        assert_eq!(stored[0].date.to_string(), "2025-05-21");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let (mut fixture, mut dataset) = fixture();

        run(&mut fixture.store, &mut dataset, "reps").unwrap();
        let once = dataset.entries.clone();
        run(&mut fixture.store, &mut dataset, "reps").unwrap();

        assert_eq!(dataset.entries, once);
    }

    #[test]
    fn test_sort_keeps_ties_in_source_order() {
        let entries = vec![
            entry("Squat", 5, 225.0, "2025-05-19"),
            entry("Bench Press", 5, 135.0, "2025-05-20"),
            entry("Row", 5, 95.0, "2025-05-21"),
        ];
        let mut fixture = StoreFixture::new().with_entries("data", entries.clone());
        let mut dataset = Dataset::with_entries("data", entries);

        run(&mut fixture.store, &mut dataset, "reps").unwrap();

        let names: Vec<&str> = dataset
            .entries
            .iter()
            .map(|e| e.exercise.as_str())
            .collect();
        assert_eq!(names, vec!["Squat", "Bench Press", "Row"]);
    }

    #[test]
    fn test_sort_unknown_column_is_rejected() {
        let (mut fixture, mut dataset) = fixture();

        let err = run(&mut fixture.store, &mut dataset, "sets").unwrap_err();
        assert!(matches!(err, RepzError::UnknownColumn(_)));
        assert_eq!(dataset.entries[0].exercise, "Bench Press");
    }
}
