//! Error types for querybaker

use thiserror::Error;

/// Result type alias for querybaker operations
pub type QbResult<T> = Result<T, QbError>;

/// Errors raised when a builder is misused.
///
/// Rendering itself never fails; these are reported by lookups, config loading
/// and [`Statement::validate`](crate::qb::Statement::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QbError {
    /// Column lookup on a table missed
    #[error("Column '{column}' not found in table '{table}'")]
    UnknownColumn { table: String, column: String },

    /// A column with the same name is already owned by the table
    #[error("Column '{column}' already exists in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// A statement is missing the list it cannot be rendered without
    #[error("Empty statement: {0}")]
    EmptyStatement(String),

    /// Caller passed something the builders refuse to render
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl QbError {
    /// Create an unknown column error
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a duplicate column error
    pub fn duplicate_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create an empty statement error
    pub fn empty_statement(message: impl Into<String>) -> Self {
        Self::EmptyStatement(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an unknown column error
    pub fn is_unknown_column(&self) -> bool {
        matches!(self, Self::UnknownColumn { .. })
    }

    /// Check if this is an empty statement error
    pub fn is_empty_statement(&self) -> bool {
        matches!(self, Self::EmptyStatement(_))
    }
}

impl From<toml::de::Error> for QbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for QbError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(err.to_string())
    }
}
