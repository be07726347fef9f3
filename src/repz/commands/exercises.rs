use std::collections::BTreeSet;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Dataset;

/// Lists the distinct exercise names in the dataset, sorted. Names are
/// case-sensitive, so "squat" and "Squat" count as two exercises.
pub fn run(dataset: &Dataset) -> Result<CmdResult> {
    let names: BTreeSet<String> = dataset
        .entries
        .iter()
        .map(|e| e.exercise.clone())
        .collect();

    let mut result = CmdResult::default().with_listed_names(names.into_iter().collect());
    if result.listed_names.is_empty() {
        result.add_message(CmdMessage::info("No entries yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::entry;

    #[test]
    fn test_exercises_are_unique_and_sorted() {
        let dataset = Dataset::with_entries(
            "data",
            vec![
                entry("Squat", 5, 225.0, "2025-05-19"),
                entry("Bench Press", 8, 135.0, "2025-05-19"),
                entry("Squat", 3, 245.0, "2025-05-21"),
            ],
        );

        let result = run(&dataset).unwrap();
        assert_eq!(result.listed_names, vec!["Bench Press", "Squat"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_exercises_are_case_sensitive() {
        let dataset = Dataset::with_entries(
            "data",
            vec![
                entry("squat", 5, 225.0, "2025-05-19"),
                entry("Squat", 3, 245.0, "2025-05-21"),
            ],
        );

        let result = run(&dataset).unwrap();
        assert_eq!(result.listed_names, vec!["Squat", "squat"]);
    }

    #[test]
    fn test_empty_dataset_reports_no_entries() {
        let result = run(&Dataset::new("data")).unwrap();
        assert!(result.listed_names.is_empty());
        assert_eq!(result.messages[0].content, "No entries yet.");
    }
}
