//! Common types and helpers shared across all statement builders

use crate::config::LineEnding;
use crate::operator::{JoinOperator, ReservedClause};
use crate::validate::{validate_value, OperationKind, ValueClassification};
use crate::{ColumnType, Error, Result};

/// Core trait for all statement builders
pub trait QueryBuilder {
    /// Generate the statement text
    ///
    /// Shape checks run first, then every value is validated, and only then
    /// is text assembled. Any failure aborts the whole build.
    fn to_sql(&self) -> Result<String>;
}

/// One value of a row, paired with the column it belongs to
///
/// Rows are turned into ordered sequences of these records once the shape
/// guard has passed, so assembly never cross-indexes parallel inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValue<'a> {
    pub column: &'a str,
    pub column_type: ColumnType,
    pub value: &'a str,
    pub classification: ValueClassification,
}

impl ColumnValue<'_> {
    /// The value wrapped in its column type's quantifier
    pub fn literal(&self) -> Result<String> {
        let quantifier = self.column_type.quantifier()?;
        Ok(format!("{quantifier}{}{quantifier}", self.value))
    }

    pub fn reserved_clause(&self) -> Option<ReservedClause> {
        self.classification.reserved_clause()
    }
}

/// Fail with [`Error::ArityMismatch`] unless both inputs have the same length
pub fn ensure_same_length(
    left: &str,
    left_len: usize,
    right: &str,
    right_len: usize,
) -> Result<()> {
    if left_len != right_len {
        return Err(Error::arity_mismatch(left, right, left_len, right_len));
    }
    Ok(())
}

/// Validate every value of a row and pair it with its column and type
///
/// Callers must have checked that all three inputs have the same length.
pub fn checked_values<'a>(
    columns: &'a [String],
    types: &[ColumnType],
    values: &'a [String],
    operation: OperationKind,
) -> Result<Vec<ColumnValue<'a>>> {
    columns
        .iter()
        .zip(types)
        .zip(values)
        .map(|((column, column_type), value)| {
            let classification = validate_value(column, value, operation)?;
            Ok(ColumnValue {
                column,
                column_type: *column_type,
                value,
                classification,
            })
        })
        .collect()
}

pub(crate) fn owned<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|item| item.as_ref().to_string()).collect()
}

/// Accumulates statement fragments, one terminated line each
#[derive(Debug)]
pub(crate) struct StatementWriter {
    sql: String,
    line_ending: LineEnding,
}

impl StatementWriter {
    pub(crate) fn new(line_ending: LineEnding) -> Self {
        Self {
            sql: String::new(),
            line_ending,
        }
    }

    pub(crate) fn line(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
        self.sql.push_str(self.line_ending.as_str());
    }

    pub(crate) fn finish(self) -> String {
        self.sql
    }
}

/// Comma-separated literals of a row, as used by VALUES(...) and SELECT
pub(crate) fn literal_list(items: &[ColumnValue<'_>]) -> Result<String> {
    let literals = items
        .iter()
        .map(ColumnValue::literal)
        .collect::<Result<Vec<_>>>()?;
    Ok(literals.join(","))
}

/// Render WHERE-side predicates chained by their join operators
///
/// Operator `i` joins predicate `i` and `i + 1`; the operator paired with the
/// last predicate is never read.
pub(crate) fn render_predicates(
    items: &[ColumnValue<'_>],
    operators: &[JoinOperator],
) -> Result<String> {
    let mut body = String::new();

    for (i, item) in items.iter().enumerate() {
        let quantifier = item.column_type.quantifier()?;
        let predicate = match item.reserved_clause() {
            Some(clause) => format!(" {} {}", item.column, clause.as_str()),
            None => format!(" {} = {quantifier}{}{quantifier}", item.column, item.value),
        };
        body.push_str(&predicate);

        if i + 1 < items.len() {
            let operator = operators.get(i).ok_or_else(|| {
                Error::arity_mismatch(
                    "WHERE columns data",
                    "(AND, OR) operators",
                    items.len(),
                    operators.len(),
                )
            })?;
            body.push(' ');
            body.push_str(operator.as_str());
        }
    }

    Ok(body)
}

/// Render SET-side assignments, one per line, comma after all but the last
///
/// Every value is written as a quoted literal, reserved clauses included.
pub(crate) fn render_assignments(items: &[ColumnValue<'_>]) -> Result<Vec<String>> {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let separator = if i < last { "," } else { "" };
            Ok(format!(" {} = {}{separator}", item.column, item.literal()?))
        })
        .collect()
}
