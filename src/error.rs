//! Error types for table creation and row insertion

use std::fmt;

use thiserror::Error;

/// The syntactic slot an identifier was meant to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Table,
    Column,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Table => f.write_str("table"),
            IdentifierKind::Column => f.write_str("column"),
        }
    }
}

/// Errors that can occur while building or executing a statement
#[derive(Debug, Error)]
pub enum TableCreatorError {
    #[error("Invalid {kind} name: '{value}'")]
    InvalidIdentifier { kind: IdentifierKind, value: String },

    #[error("Data type '{value}' not allowed")]
    InvalidDataType { value: String },

    #[error("Constraint '{value}' not allowed")]
    InvalidConstraint { value: String },

    #[error("Row has {values} values but {columns} column names were given")]
    ArityMismatch { columns: usize, values: usize },

    #[error("Table '{table}' has no columns")]
    EmptySchema { table: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Execution error: {0}")]
    Execution(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TableCreatorError {
    pub fn invalid_identifier(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Execution(Box::new(err))
    }

    /// Whether the error was raised before any SQL reached the connection
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier { .. }
                | Self::InvalidDataType { .. }
                | Self::InvalidConstraint { .. }
                | Self::ArityMismatch { .. }
                | Self::EmptySchema { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TableCreatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_value_and_kind() {
        let err = TableCreatorError::invalid_identifier(IdentifierKind::Table, "Person;");
        assert_eq!(err.to_string(), "Invalid table name: 'Person;'");

        let err = TableCreatorError::invalid_identifier(IdentifierKind::Column, "Name");
        assert_eq!(err.to_string(), "Invalid column name: 'Name'");

        let err = TableCreatorError::ArityMismatch {
            columns: 2,
            values: 1,
        };
        assert!(err.to_string().contains("1 values"));
        assert!(err.to_string().contains("2 column names"));
    }

    #[test]
    fn test_is_validation() {
        assert!(
            TableCreatorError::InvalidDataType {
                value: "DROP".into()
            }
            .is_validation()
        );
        assert!(TableCreatorError::EmptySchema { table: "T".into() }.is_validation());
        assert!(!TableCreatorError::config("missing").is_validation());
        assert!(!TableCreatorError::execution(std::fmt::Error).is_validation());
    }

    #[test]
    fn test_execution_keeps_source() {
        use std::error::Error as _;

        let err = TableCreatorError::execution(std::fmt::Error);
        assert!(err.source().is_some());
    }
}
