//! Predicate parsing and evaluation over an in-memory table.
//!
//! A filter is a conjunction of equality tests, one per `column:value`
//! (or `column=value`) token. There are no ranges, negation, or OR.
//! Parsing is strict: an unknown column, a malformed token, or a value
//! that does not coerce to the column's type aborts the whole filter
//! rather than partially applying it.

use crate::error::{RepzError, Result};
use crate::model::Entry;
use crate::schema::{self, Column, FieldValue};

/// One equality test against a single column, with the value already
/// coerced to the column's type.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: Column,
    pub value: FieldValue,
}

impl Predicate {
    pub fn new(column: Column, value: FieldValue) -> Self {
        Self { column, value }
    }

    /// Check whether the entry's field equals this predicate's value.
    pub fn matches(&self, entry: &Entry) -> bool {
        schema::field_value(entry, self.column) == self.value
    }
}

/// Parse raw `column:value` / `column=value` tokens into typed predicates.
pub fn parse(tokens: &[String]) -> Result<Vec<Predicate>> {
    tokens.iter().map(|t| parse_token(t)).collect()
}

fn parse_token(token: &str) -> Result<Predicate> {
    let (name, raw) = token
        .split_once([':', '='])
        .ok_or_else(|| RepzError::InvalidPredicate(token.to_string()))?;
    let column = Column::parse(name)?;
    let value = column.coerce(raw)?;
    Ok(Predicate::new(column, value))
}

/// Return the entries matching ALL predicates, preserving source order.
/// No predicates means every entry matches; no matches is an empty vec,
/// not an error.
pub fn evaluate(entries: &[Entry], predicates: &[Predicate]) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| predicates.iter().all(|p| p.matches(entry)))
        .cloned()
        .collect()
}
