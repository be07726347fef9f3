//! The fixed dataset schema: column definitions and value coercion.
//!
//! Every dataset has the same four columns. This module is the only place
//! that knows how raw user text becomes typed field values; both entry
//! creation (`parse_entry`) and filter-value coercion (`Column::coerce`)
//! go through it.

use crate::error::{RepzError, Result};
use crate::model::Entry;
use chrono::{Local, NaiveDate};

/// Canonical header row of every dataset file, in column order.
pub const HEADER: [&str; 4] = ["Exercise", "Reps", "Weight", "Date"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One of the four recognized columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Exercise,
    Reps,
    Weight,
    Date,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Exercise, Column::Reps, Column::Weight, Column::Date];

    /// The column's header spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Exercise => "Exercise",
            Column::Reps => "Reps",
            Column::Weight => "Weight",
            Column::Date => "Date",
        }
    }

    /// Resolve a user-supplied column name, case-insensitively, so both the
    /// header spelling (`Weight`) and the command spelling (`weight`) work.
    pub fn parse(name: &str) -> Result<Column> {
        match name.to_ascii_lowercase().as_str() {
            "exercise" => Ok(Column::Exercise),
            "reps" => Ok(Column::Reps),
            "weight" => Ok(Column::Weight),
            "date" => Ok(Column::Date),
            _ => Err(RepzError::UnknownColumn(name.to_string())),
        }
    }

    /// Coerce a raw filter value to this column's type.
    ///
    /// Numeric columns compare numerically and the date column by calendar
    /// date, so `reps:8` matches a stored `8` and `date:2025-5-19` matches a
    /// stored `2025-05-19`. A value that does not parse is an
    /// `InvalidFilterValue`, never a silent non-match.
    pub fn coerce(&self, raw: &str) -> Result<FieldValue> {
        let invalid = || RepzError::InvalidFilterValue {
            column: self.name().to_string(),
            value: raw.to_string(),
        };
        match self {
            Column::Exercise => Ok(FieldValue::Text(raw.to_string())),
            Column::Reps => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| invalid()),
            Column::Weight => raw
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| invalid()),
            Column::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(FieldValue::Date)
                .map_err(|_| invalid()),
        }
    }
}

/// Runtime representation of a single field, tagged by column type.
///
/// Equality is per-variant, so comparisons in the filter engine are
/// type-safe: an integer never string-compares against a date.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

/// Extract an entry's value for the given column as a typed [`FieldValue`].
pub fn field_value(entry: &Entry, column: Column) -> FieldValue {
    match column {
        Column::Exercise => FieldValue::Text(entry.exercise.clone()),
        Column::Reps => FieldValue::Integer(entry.reps),
        Column::Weight => FieldValue::Float(entry.weight),
        Column::Date => FieldValue::Date(entry.date),
    }
}

/// Validate and coerce raw fields into an [`Entry`].
///
/// Expects `[exercise, reps, weight]` or `[exercise, reps, weight, date]`.
/// The exercise is taken verbatim (the frontend has already dequoted it).
/// When the date is omitted it defaults to today, computed at call time
/// rather than process start.
pub fn parse_entry(fields: &[String]) -> Result<Entry> {
    if fields.len() < 3 || fields.len() > 4 {
        return Err(RepzError::Arity(fields.len()));
    }

    let exercise = fields[0].clone();
    let reps = fields[1]
        .parse::<i64>()
        .map_err(|_| RepzError::InvalidNumber("reps", fields[1].clone()))?;
    let weight = fields[2]
        .parse::<f64>()
        .map_err(|_| RepzError::InvalidNumber("weight", fields[2].clone()))?;
    let date = match fields.get(3) {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| RepzError::InvalidDate(raw.clone()))?,
        None => Local::now().date_naive(),
    };

    Ok(Entry {
        exercise,
        reps,
        weight,
        date,
    })
}
