//! sqlscribe core - validating builder for INSERT, UPDATE and DELETE statement text
//!
//! Table and column metadata plus string-encoded row data go in; statement
//! text comes out. Before any text is assembled, parallel inputs are checked
//! for matching lengths and every value is screened: `IS NULL` / `IS NOT NULL`
//! are only accepted on the predicate side, and values that look like
//! `DROP TABLE` / `DELETE FROM` injections are rejected.
//!
//! The injection screen is a best-effort guard, not a security boundary.
//! Parameterized queries remain the right tool for untrusted input; embedded
//! apostrophes are not escaped here.
//!
//! ```
//! use sqlscribe_core::{build_insert, ColumnType, InsertStrategy};
//!
//! let sql = build_insert(
//!     "T",
//!     &["a", "b"],
//!     &[ColumnType::Int32, ColumnType::String],
//!     &[["1", "x"]],
//!     InsertStrategy::ValuesList,
//! )
//! .unwrap();
//! assert_eq!(sql, "INSERT T(a,b)\nINSERT T VALUES(1,'x')\n");
//! ```

pub mod builder;
pub mod column_type;
pub mod config;
pub mod error;
pub mod operator;
pub mod procedure;
pub mod request;
pub mod validate;
pub mod xml;

// Re-export main types
pub use builder::{
    ColumnValue, DeleteBuilder, InsertBuilder, InsertStrategy, QueryBuilder, SqlBuilder,
    UpdateBuilder,
};
pub use column_type::ColumnType;
pub use config::{BuilderConfig, LineEnding, DEFAULT_XML_VARIABLE};
pub use error::{Error, Result};
pub use operator::{op, JoinOperator, ReservedClause};
pub use procedure::{procedure_parameters, table_parameter, ProcedureParameter};
pub use request::{parse_column_types, StatementRequest};
pub use validate::{is_injection_suspect, validate_value, OperationKind, ValueClassification};
pub use xml::{is_xml_query, XmlQuery};

/// Create a new INSERT builder for the given table
pub fn insert(table: &str) -> InsertBuilder {
    InsertBuilder::new(table)
}

/// Create a new UPDATE builder for the given table
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Create a new DELETE builder for the given table
pub fn delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Build an INSERT with the default configuration
pub fn build_insert<R, S>(
    table: &str,
    columns: &[S],
    types: &[ColumnType],
    rows: &[R],
    strategy: InsertStrategy,
) -> Result<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    SqlBuilder::default().build_insert(table, columns, types, rows, strategy)
}

/// Build an UPDATE with the default configuration
#[allow(clippy::too_many_arguments)]
pub fn build_update<S: AsRef<str>>(
    table: &str,
    set_columns: &[S],
    set_values: &[S],
    set_types: &[ColumnType],
    where_columns: &[S],
    where_values: &[S],
    where_types: &[ColumnType],
    join_operators: &[JoinOperator],
) -> Result<String> {
    SqlBuilder::default().build_update(
        table,
        set_columns,
        set_values,
        set_types,
        where_columns,
        where_values,
        where_types,
        join_operators,
    )
}

/// Build a DELETE with the default configuration
pub fn build_delete<S: AsRef<str>>(
    table: &str,
    columns: &[S],
    values: &[S],
    types: &[ColumnType],
    join_operators: &[JoinOperator],
) -> Result<String> {
    SqlBuilder::default().build_delete(table, columns, values, types, join_operators)
}

/// Wrap a `FOR XML` query into `@XML_QUERY_RESULT`, followed by a SELECT of it
pub fn to_xml_capable_query(sql: &str) -> Result<String> {
    XmlQuery::new(sql).to_sql()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_clause_gating() {
        let err = build_insert(
            "T",
            &["a"],
            &[ColumnType::DateTime],
            &[["IS NULL"]],
            InsertStrategy::ValuesList,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ReservedClauseNotAllowedInInsert { .. }));

        let sql = build_delete("T", &["a"], &["IS NULL"], &[ColumnType::DateTime], &[op::AND])
            .unwrap();
        assert!(sql.contains(" a IS NULL"));
        assert!(!sql.contains("'IS NULL'"));

        let sql = build_update(
            "T",
            &["b"],
            &["1"],
            &[ColumnType::Int32],
            &["a"],
            &["IS NULL"],
            &[ColumnType::DateTime],
            &[op::AND],
        )
        .unwrap();
        assert!(sql.ends_with("WHERE\n a IS NULL\n"));
    }

    #[test]
    fn test_update_set_accepts_reserved_clauses() {
        for clause in ["IS NULL", "IS NOT NULL"] {
            let sql = build_update(
                "T",
                &["a"],
                &[clause],
                &[ColumnType::String],
                &["id"],
                &["1"],
                &[ColumnType::Int32],
                &[op::AND],
            )
            .unwrap();
            assert_eq!(sql, format!("UPDATE T\nSET\n a = '{clause}'\nWHERE\n id = 1\n"));
        }
    }

    #[test]
    fn test_quoting_follows_declared_type() {
        let sql = build_delete(
            "T",
            &["n", "s", "d", "b", "c"],
            &["42", "42", "2024-01-15", "1", "Y"],
            &[
                ColumnType::Int64,
                ColumnType::String,
                ColumnType::DateTime,
                ColumnType::Boolean,
                ColumnType::Char,
            ],
            &[op::AND; 5],
        )
        .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM T\nWHERE\n n = 42 AND s = '42' AND d = '2024-01-15' AND b = '1' AND c = 'Y'\n"
        );
    }

    #[test]
    fn test_benign_apostrophe_is_not_escaped() {
        let sql = build_insert(
            "people",
            &["name"],
            &[ColumnType::String],
            &[["O'Brien"]],
            InsertStrategy::ValuesList,
        )
        .unwrap();
        assert!(sql.contains("VALUES('O'Brien')"));
    }

    #[test]
    fn test_xml_wrapper() {
        assert!(matches!(
            to_xml_capable_query("SELECT 1").unwrap_err(),
            Error::NotAnXmlQuery { .. }
        ));
        let sql = to_xml_capable_query("SELECT * FROM t FOR XML AUTO").unwrap();
        assert_eq!(sql.lines().count(), 3);
        assert!(sql.starts_with("DECLARE @XML_QUERY_RESULT"));
    }
}
