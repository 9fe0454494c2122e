//! Error types for sqlscribe

use thiserror::Error;

/// The main error type for statement building
///
/// Every variant is fatal to the build call that raised it: no partial
/// statement text is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Two parallel inputs disagree in length
    #[error("Number of supplied '{left}' ({left_len}) does not match the number of specified '{right}' ({right_len})")]
    ArityMismatch {
        left: String,
        right: String,
        left_len: usize,
        right_len: usize,
    },

    /// `IS NULL` / `IS NOT NULL` used as an INSERT value
    #[error("Value '{value}' for column '{column}' is not allowed in INSERT: 'IS NULL' and 'IS NOT NULL' are reserved for DELETE or UPDATE")]
    ReservedClauseNotAllowedInInsert { column: String, value: String },

    /// A value tripped the injection screen
    #[error("Possible SQL injection attack in column '{column}': '{value}'")]
    PossibleInjectionDetected { column: String, value: String },

    /// A column type that has no literal quoting convention
    #[error("Column type '{type_name}' is not supported")]
    UnsupportedColumnType { type_name: String },

    /// The query handed to the XML wrapper has no FOR XML clause
    #[error("Query '{query}' is not an xml query")]
    NotAnXmlQuery { query: String },

    /// A join operator string other than AND / OR
    #[error("Unknown join operator '{operator}', expected AND or OR")]
    UnknownJoinOperator { operator: String },

    /// Nothing to build from
    #[error("{operation} statement cannot be built: {message}")]
    EmptyStatement {
        operation: &'static str,
        message: String,
    },

    /// Statement request document could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for sqlscribe operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new arity mismatch error
    pub fn arity_mismatch(
        left: impl Into<String>,
        right: impl Into<String>,
        left_len: usize,
        right_len: usize,
    ) -> Self {
        Self::ArityMismatch {
            left: left.into(),
            right: right.into(),
            left_len,
            right_len,
        }
    }

    /// Create a new reserved-clause-in-INSERT error
    pub fn reserved_clause_in_insert(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ReservedClauseNotAllowedInInsert {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a new possible injection error
    pub fn possible_injection(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::PossibleInjectionDetected {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a new unsupported column type error
    pub fn unsupported_column_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedColumnType {
            type_name: type_name.into(),
        }
    }

    /// Create a new not-an-xml-query error
    pub fn not_an_xml_query(query: impl Into<String>) -> Self {
        Self::NotAnXmlQuery {
            query: query.into(),
        }
    }

    /// Create a new unknown join operator error
    pub fn unknown_join_operator(operator: impl Into<String>) -> Self {
        Self::UnknownJoinOperator {
            operator: operator.into(),
        }
    }

    /// Create a new empty statement error
    pub fn empty_statement(operation: &'static str, message: impl Into<String>) -> Self {
        Self::EmptyStatement {
            operation,
            message: message.into(),
        }
    }
}
