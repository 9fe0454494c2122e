//! Value validation: classification and the injection screen
//!
//! Every value of a build call passes through [`validate_value`] before any
//! statement text is assembled. The injection screen is a best-effort textual
//! check for a handful of destructive phrases; it is not a substitute for
//! parameterized queries.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::operator::ReservedClause;
use crate::{Error, Result};

/// Statement being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Insert,
    Update,
    Delete,
}

impl OperationKind {
    /// SQL keyword of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Insert => "INSERT",
            OperationKind::Update => "UPDATE",
            OperationKind::Delete => "DELETE",
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a value that passed validation is to be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClassification {
    /// Parses as a 32-bit integer
    NumericLiteral,
    /// `IS NULL` / `IS NOT NULL` in a predicate-capable position
    ReservedClause(ReservedClause),
    /// Empty input; no screen was run on it
    EmptyText,
    /// Any other text; SQL-level correctness is left to the engine
    Text,
}

impl ValueClassification {
    pub fn is_reserved(&self) -> bool {
        matches!(self, ValueClassification::ReservedClause(_))
    }

    /// Everything except a numeric literal is treated as string-typed input
    pub fn is_string(&self) -> bool {
        !matches!(self, ValueClassification::NumericLiteral)
    }

    pub fn reserved_clause(&self) -> Option<ReservedClause> {
        match self {
            ValueClassification::ReservedClause(clause) => Some(*clause),
            _ => None,
        }
    }
}

fn injection_pattern() -> &'static Regex {
    static INJECTION_RE: OnceLock<Regex> = OnceLock::new();
    INJECTION_RE.get_or_init(|| {
        Regex::new(r"(?is)drop\s*(/\*.*\*/)?\s*table|delete\s*(/\*.*\*/)?\s*from")
            .expect("invalid built-in injection regex")
    })
}

/// Returns `true` if `value` contains `drop ... table` or `delete ... from`
///
/// Matching is case-insensitive and tolerates whitespace or a single
/// `/* ... */` comment between the two words.
pub fn is_injection_suspect(value: &str) -> bool {
    injection_pattern().is_match(value)
}

/// Classify a single value destined for `column`
///
/// # Errors
///
/// - [`Error::ReservedClauseNotAllowedInInsert`] for `IS NULL` / `IS NOT NULL`
///   when `operation` is INSERT
/// - [`Error::PossibleInjectionDetected`] when the injection screen matches
pub fn validate_value(
    column: &str,
    value: &str,
    operation: OperationKind,
) -> Result<ValueClassification> {
    if value.trim().parse::<i32>().is_ok() {
        return Ok(ValueClassification::NumericLiteral);
    }

    if let Some(clause) = ReservedClause::parse(value) {
        return match operation {
            OperationKind::Insert => Err(Error::reserved_clause_in_insert(column, value)),
            OperationKind::Update | OperationKind::Delete => {
                Ok(ValueClassification::ReservedClause(clause))
            }
        };
    }

    if value.is_empty() {
        return Ok(ValueClassification::EmptyText);
    }

    if is_injection_suspect(value) {
        tracing::warn!(
            column = column,
            operation = %operation,
            "rejected value matching the injection screen"
        );
        return Err(Error::possible_injection(column, value));
    }

    Ok(ValueClassification::Text)
}
