//! Error types for the engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset load error
    #[error("Dataset load error: {0}")]
    Dataset(#[from] DatasetLoadError),

    /// Query error
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors raised while loading the source dataset
///
/// Any of these is fatal at startup: the process must not start serving
/// traffic over a partially loaded store.
#[derive(Error, Debug)]
pub enum DatasetLoadError {
    /// Source file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV syntax
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A cell holds a value the column's type cannot represent
    #[error("Invalid value in column {column} at line {line}: {message}")]
    InvalidValue {
        /// Column name
        column: String,
        /// 1-based line number in the source file (header is line 1)
        line: u64,
        /// What was wrong with the value
        message: String,
    },

    /// The dataset contains a header but no rows
    #[error("Dataset is empty")]
    Empty,
}

/// Errors raised while dispatching a query
///
/// Recoverable: surfaced to the caller as a client error without affecting
/// the shared store or other in-flight queries. Unrecognized filter *values*
/// are not errors; they select the empty subset.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The requested name is not in the fixed query registry
    #[error("Unknown query: {name}")]
    UnknownQuery {
        /// The rejected query name
        name: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_query_display() {
        let err = QueryError::UnknownQuery {
            name: "attrition-by-shoe-size".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown query: attrition-by-shoe-size");
    }

    #[test]
    fn test_load_error_carries_location() {
        let err = DatasetLoadError::InvalidValue {
            column: "Age".to_string(),
            line: 17,
            message: "non-numeric value 'abc'".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("Age"));
        assert!(display.contains("17"));
    }
}
