//! DELETE statement builder

use super::common::{
    checked_values, ensure_same_length, owned, render_predicates, QueryBuilder, StatementWriter,
};
use crate::config::LineEnding;
use crate::operator::JoinOperator;
use crate::validate::OperationKind;
use crate::{ColumnType, Error, Result};

/// DELETE statement builder
///
/// A DELETE is only ever produced with a WHERE clause.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table_name: String,
    columns: Vec<String>,
    values: Vec<String>,
    types: Vec<ColumnType>,
    operators: Vec<JoinOperator>,
    line_ending: LineEnding,
}

impl DeleteBuilder {
    /// Create a new DELETE builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            columns: Vec::new(),
            values: Vec::new(),
            types: Vec::new(),
            operators: Vec::new(),
            line_ending: LineEnding::default(),
        }
    }

    /// Predicate columns, the values they are compared to, and their declared types
    pub fn where_<S: AsRef<str>>(
        mut self,
        columns: &[S],
        values: &[S],
        types: &[ColumnType],
    ) -> Self {
        self.columns = owned(columns);
        self.values = owned(values);
        self.types = types.to_vec();
        self
    }

    /// One operator per predicate; the last entry is never rendered
    pub fn join_operators(mut self, operators: &[JoinOperator]) -> Self {
        self.operators = operators.to_vec();
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    fn check_shape(&self) -> Result<()> {
        ensure_same_length("columns", self.columns.len(), "types", self.types.len())?;
        ensure_same_length("columns", self.columns.len(), "columns data", self.values.len())?;
        ensure_same_length(
            "columns data",
            self.values.len(),
            "(AND, OR) operators",
            self.operators.len(),
        )?;

        if self.columns.is_empty() {
            return Err(Error::empty_statement(
                "DELETE",
                "DELETE requires WHERE condition for safety",
            ));
        }
        Ok(())
    }
}

impl QueryBuilder for DeleteBuilder {
    fn to_sql(&self) -> Result<String> {
        self.check_shape()?;

        let predicates =
            checked_values(&self.columns, &self.types, &self.values, OperationKind::Delete)?;

        let mut writer = StatementWriter::new(self.line_ending);
        writer.line(&format!("DELETE FROM {}", self.table_name));
        writer.line("WHERE");
        writer.line(&render_predicates(&predicates, &self.operators)?);

        tracing::debug!(
            operation = "DELETE",
            table = %self.table_name,
            where_columns = predicates.len(),
            "built statement"
        );

        Ok(writer.finish())
    }
}
