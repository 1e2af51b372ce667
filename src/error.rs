//! Error types.
//!
//! Every failure in this crate is a caller contract violation (malformed
//! population, bad column declaration, unparsable cell) or an I/O fault
//! in the CSV driver. Nothing is retried.

use thiserror::Error;

/// Errors produced by ranking and by the CSV driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("individual at position {position} has an empty fitness vector")]
    EmptyFitness { position: usize },

    #[error(
        "individual at position {position} has {found} objectives, expected {expected}"
    )]
    LengthMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid column declaration '{spec}': {reason}")]
    InvalidColumnSpec { spec: String, reason: String },

    #[error("no columns to optimize over")]
    NoColumns,

    #[error("column '{column}' not in header {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("column '{0}' is listed more than once")]
    DuplicateColumn(String),

    #[error("column '{0}' appears more than once in the input header")]
    AmbiguousColumn(String),

    #[error("output column '{0}' already exists in the input header")]
    FrontColumnExists(String),

    #[error("input has no header row")]
    MissingHeader,

    #[error("line {line}, column '{column}': cannot read '{value}' as {expected}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("cannot {action} file '{path}': {source}")]
    File {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = Error::LengthMismatch {
            position: 3,
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "individual at position 3 has 1 objectives, expected 2"
        );

        let err = Error::MissingColumn {
            column: "cost".into(),
            available: vec!["a".into(), "b".into()],
        };
        assert!(err.to_string().contains("'cost'"));
        assert!(err.to_string().contains("\"a\""));

        let err = Error::InvalidValue {
            line: 7,
            column: "score".into(),
            value: "abc".into(),
            expected: "a number",
        };
        assert_eq!(
            err.to_string(),
            "line 7, column 'score': cannot read 'abc' as a number"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
