use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepzError {
    #[error("Expected 3 or 4 fields (exercise, reps, weight, optional date), got {0}")]
    Arity(usize),

    #[error("Invalid number for {0}: '{1}'")]
    InvalidNumber(&'static str, String),

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    #[error("Schema mismatch: expected header '{expected}', found '{found}'")]
    SchemaMismatch { expected: String, found: String },

    #[error("Dataset not found: '{0}'")]
    NotFound(String),

    #[error("Invalid {column} value in filter: '{value}'")]
    InvalidFilterValue { column: String, value: String },

    #[error("Invalid predicate: '{0}' (expected column:value)")]
    InvalidPredicate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RepzError>;
