use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One workout record: a single row of a dataset.
///
/// Field names are renamed to match the stored CSV header
/// (`Exercise,Reps,Weight,Date`), so the csv codec reads and writes the
/// canonical column spelling without extra mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    pub exercise: String,
    pub reps: i64,
    pub weight: f64,
    pub date: NaiveDate,
}

impl Entry {
    pub fn new(exercise: impl Into<String>, reps: i64, weight: f64, date: NaiveDate) -> Self {
        Self {
            exercise: exercise.into(),
            reps,
            weight,
            date,
        }
    }
}

/// A named, ordered table of entries: the in-memory form of one dataset file.
///
/// Insertion order is preserved except across an explicit sort. Exactly one
/// dataset is open at a time, held by the session (`RepzApi`).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
