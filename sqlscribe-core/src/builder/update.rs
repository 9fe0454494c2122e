//! UPDATE statement builder

use super::common::{
    checked_values, ensure_same_length, owned, render_assignments, render_predicates,
    QueryBuilder, StatementWriter,
};
use crate::config::LineEnding;
use crate::operator::JoinOperator;
use crate::validate::OperationKind;
use crate::{ColumnType, Error, Result};

/// UPDATE statement builder
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table_name: String,
    set_columns: Vec<String>,
    set_values: Vec<String>,
    set_types: Vec<ColumnType>,
    where_columns: Vec<String>,
    where_values: Vec<String>,
    where_types: Vec<ColumnType>,
    operators: Vec<JoinOperator>,
    line_ending: LineEnding,
}

impl UpdateBuilder {
    /// Create a new UPDATE builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            set_columns: Vec::new(),
            set_values: Vec::new(),
            set_types: Vec::new(),
            where_columns: Vec::new(),
            where_values: Vec::new(),
            where_types: Vec::new(),
            operators: Vec::new(),
            line_ending: LineEnding::default(),
        }
    }

    /// Columns to assign, with their new values and declared types
    ///
    /// # Examples
    /// ```
    /// use sqlscribe_core::{op, update, ColumnType, QueryBuilder};
    ///
    /// let sql = update("users")
    ///     .set(&["name"], &["Jane"], &[ColumnType::String])
    ///     .where_(&["id"], &["7"], &[ColumnType::Int32])
    ///     .join_operators(&[op::AND])
    ///     .to_sql()
    ///     .unwrap();
    /// assert_eq!(sql, "UPDATE users\nSET\n name = 'Jane'\nWHERE\n id = 7\n");
    /// ```
    pub fn set<S: AsRef<str>>(mut self, columns: &[S], values: &[S], types: &[ColumnType]) -> Self {
        self.set_columns = owned(columns);
        self.set_values = owned(values);
        self.set_types = types.to_vec();
        self
    }

    /// Predicate columns, the values they are compared to, and their declared types
    pub fn where_<S: AsRef<str>>(
        mut self,
        columns: &[S],
        values: &[S],
        types: &[ColumnType],
    ) -> Self {
        self.where_columns = owned(columns);
        self.where_values = owned(values);
        self.where_types = types.to_vec();
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
        let set_len = self.set_columns.len();
        let where_len = self.where_columns.len();
        ensure_same_length("SET columns", set_len, "SET columns data", self.set_values.len())?;
        ensure_same_length("SET columns", set_len, "SET types", self.set_types.len())?;
        ensure_same_length(
            "WHERE columns",
            where_len,
            "WHERE columns data",
            self.where_values.len(),
        )?;
        ensure_same_length("WHERE columns", where_len, "WHERE types", self.where_types.len())?;
        ensure_same_length(
            "WHERE columns data",
            self.where_values.len(),
            "(AND, OR) operators",
            self.operators.len(),
        )?;

        if self.set_columns.is_empty() {
            return Err(Error::empty_statement("UPDATE", "no SET columns supplied"));
        }
        if self.where_columns.is_empty() {
            return Err(Error::empty_statement("UPDATE", "no WHERE columns supplied"));
        }
        Ok(())
    }
}

impl QueryBuilder for UpdateBuilder {
    fn to_sql(&self) -> Result<String> {
        self.check_shape()?;

        let assignments = checked_values(
            &self.set_columns,
            &self.set_types,
            &self.set_values,
            OperationKind::Update,
        )?;
        let predicates = checked_values(
            &self.where_columns,
            &self.where_types,
            &self.where_values,
            OperationKind::Update,
        )?;

        let mut writer = StatementWriter::new(self.line_ending);
        writer.line(&format!("UPDATE {}", self.table_name));
        writer.line("SET");
        for assignment in render_assignments(&assignments)? {
            writer.line(&assignment);
        }
        writer.line("WHERE");
        writer.line(&render_predicates(&predicates, &self.operators)?);

        tracing::debug!(
            operation = "UPDATE",
            table = %self.table_name,
            set_columns = assignments.len(),
            where_columns = predicates.len(),
            "built statement"
        );

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::op;
    use crate::update;

    #[test]
    fn test_update_builder() {
        let sql = update("users")
            .set(
                &["name", "age"],
                &["Jane", "25"],
                &[ColumnType::String, ColumnType::Int32],
            )
            .where_(
                &["id", "active"],
                &["1", "true"],
                &[ColumnType::Int32, ColumnType::Boolean],
            )
            .join_operators(&[op::AND, op::AND])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE users\nSET\n name = 'Jane',\n age = 25\nWHERE\n id = 1 AND active = 'true'\n"
        );
    }

    #[test]
    fn test_update_where_reserved_clause() {
        let sql = update("users")
            .set(&["status"], &["archived"], &[ColumnType::String])
            .where_(
                &["deleted_at", "status"],
                &["IS NULL", "active"],
                &[ColumnType::DateTime, ColumnType::String],
            )
            .join_operators(&[op::OR, op::AND])
            .to_sql()
            .unwrap();
        assert!(sql.ends_with("WHERE\n deleted_at IS NULL OR status = 'active'\n"));
        assert!(!sql.contains("'IS NULL'"));
    }

    #[test]
    fn test_update_set_reserved_clause_renders_as_literal() {
        let sql = update("T")
            .set(&["a"], &["IS NOT NULL"], &[ColumnType::String])
            .where_(&["id"], &["1"], &[ColumnType::Int32])
            .join_operators(&[op::AND])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "UPDATE T\nSET\n a = 'IS NOT NULL'\nWHERE\n id = 1\n");

        let sql = update("T")
            .set(&["a", "n"], &["IS NULL", "IS NULL"], &[ColumnType::String, ColumnType::Int32])
            .where_(&["id"], &["1"], &[ColumnType::Int32])
            .join_operators(&[op::AND])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "UPDATE T\nSET\n a = 'IS NULL',\n n = IS NULL\nWHERE\n id = 1\n");
    }

    #[test]
    fn test_update_operator_arity() {
        let err = update("users")
            .set(&["name"], &["Jane"], &[ColumnType::String])
            .where_(&["id", "org"], &["1", "2"], &[ColumnType::Int32, ColumnType::Int32])
            .join_operators(&[op::AND])
            .to_sql()
            .unwrap_err();
        match err {
            Error::ArityMismatch { left, right, .. } => {
                assert_eq!(left, "WHERE columns data");
                assert_eq!(right, "(AND, OR) operators");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_update_set_types_arity() {
        let err = update("users")
            .set(&["name", "age"], &["Jane", "3"], &[ColumnType::String])
            .where_(&["id"], &["1"], &[ColumnType::Int32])
            .join_operators(&[op::AND])
            .to_sql()
            .unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { .. }));
    }

    #[test]
    fn test_update_injection_in_where() {
        let err = update("users")
            .set(&["name"], &["Jane"], &[ColumnType::String])
            .where_(&["name"], &["x' OR 1=1; delete from users"], &[ColumnType::String])
            .join_operators(&[op::AND])
            .to_sql()
            .unwrap_err();
        assert!(matches!(err, Error::PossibleInjectionDetected { .. }));
    }

    #[test]
    fn test_update_without_where_fails() {
        let err = update("users")
            .set(&["name"], &["Jane"], &[ColumnType::String])
            .to_sql()
            .unwrap_err();
        assert!(err.to_string().contains("no WHERE columns supplied"));
    }

    #[test]
    fn test_update_without_set_fails() {
        let err = update("users")
            .where_(&["id"], &["1"], &[ColumnType::Int32])
            .join_operators(&[op::AND])
            .to_sql()
            .unwrap_err();
        assert!(err.to_string().contains("no SET columns supplied"));
    }
}
