//! INSERT statement builder

use serde::{Deserialize, Serialize};

use super::common::{
    checked_values, ensure_same_length, literal_list, owned, QueryBuilder, StatementWriter,
};
use crate::config::LineEnding;
use crate::validate::OperationKind;
use crate::{ColumnType, Error, Result};

/// Layout used for the rows of an INSERT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertStrategy {
    /// One `INSERT t VALUES(...)` line per row
    #[default]
    ValuesList,
    /// One `SELECT ...` per row, rows separated by `UNION`
    SelectUnion,
}

/// INSERT statement builder
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table_name: String,
    columns: Vec<String>,
    types: Vec<ColumnType>,
    rows: Vec<Vec<String>>,
    strategy: InsertStrategy,
    line_ending: LineEnding,
}

impl InsertBuilder {
    /// Create a new INSERT builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            columns: Vec::new(),
            types: Vec::new(),
            rows: Vec::new(),
            strategy: InsertStrategy::default(),
            line_ending: LineEnding::default(),
        }
    }

    /// Set the target columns and their declared types
    ///
    /// # Examples
    /// ```
    /// use sqlscribe_core::{ColumnType, InsertBuilder, QueryBuilder};
    ///
    /// let sql = InsertBuilder::new("users")
    ///     .columns(&["id", "name"], &[ColumnType::Int32, ColumnType::String])
    ///     .row(&["1", "Ann"])
    ///     .to_sql()
    ///     .unwrap();
    /// assert_eq!(sql, "INSERT users(id,name)\nINSERT users VALUES(1,'Ann')\n");
    /// ```
    pub fn columns<S: AsRef<str>>(mut self, columns: &[S], types: &[ColumnType]) -> Self {
        self.columns = owned(columns);
        self.types = types.to_vec();
        self
    }

    /// Append one row of string-encoded values
    pub fn row<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        self.rows.push(owned(values));
        self
    }

    /// Append several rows
    pub fn rows<R, S>(mut self, rows: &[R]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.rows.extend(rows.iter().map(|row| owned(row.as_ref())));
        self
    }

    pub fn strategy(mut self, strategy: InsertStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    fn check_shape(&self) -> Result<()> {
        ensure_same_length("columns", self.columns.len(), "types", self.types.len())?;
        for row in &self.rows {
            ensure_same_length("values", row.len(), "columns", self.columns.len())?;
            ensure_same_length("values", row.len(), "types", self.types.len())?;
        }

        if self.columns.is_empty() {
            return Err(Error::empty_statement("INSERT", "no columns supplied"));
        }
        if self.rows.is_empty() {
            return Err(Error::empty_statement("INSERT", "no rows supplied"));
        }
        Ok(())
    }
}

impl QueryBuilder for InsertBuilder {
    fn to_sql(&self) -> Result<String> {
        self.check_shape()?;

        let rows = self
            .rows
            .iter()
            .map(|row| checked_values(&self.columns, &self.types, row, OperationKind::Insert))
            .collect::<Result<Vec<_>>>()?;

        let mut writer = StatementWriter::new(self.line_ending);
        writer.line(&format!("INSERT {}({})", self.table_name, self.columns.join(",")));

        let last = rows.len() - 1;
        for (i, row) in rows.iter().enumerate() {
            let literals = literal_list(row)?;
            match self.strategy {
                InsertStrategy::ValuesList => {
                    writer.line(&format!("INSERT {} VALUES({literals})", self.table_name));
                }
                InsertStrategy::SelectUnion => {
                    writer.line(&format!("SELECT {literals}"));
                    if i != last {
                        writer.line("");
                        writer.line("UNION");
                    }
                }
            }
        }

        tracing::debug!(
            operation = "INSERT",
            table = %self.table_name,
            columns = self.columns.len(),
            rows = rows.len(),
            strategy = ?self.strategy,
            "built statement"
        );

        Ok(writer.finish())
    }
}
