//! Statement builder module

pub mod common;
pub mod delete;
pub mod insert;
pub mod update;

pub use common::{ColumnValue, QueryBuilder};
pub use delete::DeleteBuilder;
pub use insert::{InsertBuilder, InsertStrategy};
pub use update::UpdateBuilder;

use crate::config::BuilderConfig;
use crate::operator::{parse_join_operators, JoinOperator};
use crate::request::{parse_column_types, StatementRequest};
use crate::xml::XmlQuery;
use crate::{ColumnType, Result};

/// Stateless statement builder carrying only its configuration
///
/// Every call is independent: inputs are borrowed, the statement text is
/// returned, nothing is retained. A single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlBuilder {
    config: BuilderConfig,
}

impl SqlBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build an INSERT for one or more rows
    pub fn build_insert<R, S>(
        &self,
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
        InsertBuilder::new(table)
            .columns(columns, types)
            .rows::<R, S>(rows)
            .strategy(strategy)
            .line_ending(self.config.line_ending)
            .to_sql()
    }

    /// Build an UPDATE with a SET list and a WHERE predicate chain
    #[allow(clippy::too_many_arguments)]
    pub fn build_update<S: AsRef<str>>(
        &self,
        table: &str,
        set_columns: &[S],
        set_values: &[S],
        set_types: &[ColumnType],
        where_columns: &[S],
        where_values: &[S],
        where_types: &[ColumnType],
        join_operators: &[JoinOperator],
    ) -> Result<String> {
        UpdateBuilder::new(table)
            .set(set_columns, set_values, set_types)
            .where_(where_columns, where_values, where_types)
            .join_operators(join_operators)
            .line_ending(self.config.line_ending)
            .to_sql()
    }

    /// Build a DELETE with a WHERE predicate chain
    pub fn build_delete<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        values: &[S],
        types: &[ColumnType],
        join_operators: &[JoinOperator],
    ) -> Result<String> {
        DeleteBuilder::new(table)
            .where_(columns, values, types)
            .join_operators(join_operators)
            .line_ending(self.config.line_ending)
            .to_sql()
    }

    /// Wrap a `FOR XML` query using the configured variable and SELECT flag
    pub fn to_xml_capable_query(&self, sql: &str) -> Result<String> {
        self.xml_query(sql).to_sql()
    }

    fn xml_query(&self, sql: &str) -> XmlQuery {
        XmlQuery::new(sql)
            .variable(&self.config.xml_variable)
            .generate_select(self.config.generate_xml_select)
            .line_ending(self.config.line_ending)
    }

    /// Build the statement a serialized request describes
    pub fn build_request(&self, request: &StatementRequest) -> Result<String> {
        match request {
            StatementRequest::Insert {
                table,
                columns,
                types,
                rows,
                strategy,
            } => {
                let types = parse_column_types(types)?;
                self.build_insert(table, columns, &types, rows, *strategy)
            }
            StatementRequest::Update {
                table,
                set_columns,
                set_values,
                set_types,
                where_columns,
                where_values,
                where_types,
                join_operators,
            } => {
                let set_types = parse_column_types(set_types)?;
                let where_types = parse_column_types(where_types)?;
                let join_operators = parse_join_operators(join_operators)?;
                self.build_update(
                    table,
                    set_columns,
                    set_values,
                    &set_types,
                    where_columns,
                    where_values,
                    &where_types,
                    &join_operators,
                )
            }
            StatementRequest::Delete {
                table,
                columns,
                values,
                types,
                join_operators,
            } => {
                let types = parse_column_types(types)?;
                let join_operators = parse_join_operators(join_operators)?;
                self.build_delete(table, columns, values, &types, &join_operators)
            }
            StatementRequest::XmlQuery {
                query,
                variable,
                generate_select,
            } => {
                let mut xml = self.xml_query(query);
                if let Some(variable) = variable {
                    xml = xml.variable(variable);
                }
                if let Some(generate_select) = generate_select {
                    xml = xml.generate_select(*generate_select);
                }
                xml.to_sql()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineEnding;
    use crate::operator::op;
    use crate::Error;

    #[test]
    fn test_builder_applies_line_ending() {
        let builder = SqlBuilder::new(BuilderConfig::default().with_line_ending(LineEnding::CrLf));
        let sql = builder
            .build_delete("T", &["a"], &["1"], &[ColumnType::Int32], &[op::AND])
            .unwrap();
        assert_eq!(sql, "DELETE FROM T\r\nWHERE\r\n a = 1\r\n");
    }

    #[test]
    fn test_builder_xml_defaults_from_config() {
        let builder = SqlBuilder::new(
            BuilderConfig::default()
                .with_xml_variable("@RESULT")
                .with_xml_select(false),
        );
        let sql = builder.to_xml_capable_query("SELECT 1 AS a FOR XML RAW").unwrap();
        assert_eq!(sql, "DECLARE @RESULT AS XML = ''\nSET @RESULT = (SELECT 1 AS a FOR XML RAW)\n");
    }

    #[test]
    fn test_build_insert_rows_from_vecs() {
        let rows = vec![vec!["1", "x"], vec!["2", "y"]];
        let sql = SqlBuilder::default()
            .build_insert(
                "T",
                &["a", "b"],
                &[ColumnType::Int32, ColumnType::String],
                &rows,
                InsertStrategy::SelectUnion,
            )
            .unwrap();
        assert_eq!(sql, "INSERT T(a,b)\nSELECT 1,'x'\n\nUNION\nSELECT 2,'y'\n");
    }

    #[test]
    fn test_request_update() {
        let request = StatementRequest::from_json(
            r#"{
                "operation": "update",
                "table": "users",
                "set_columns": ["name"],
                "set_values": ["Jane"],
                "set_types": ["string"],
                "where_columns": ["id", "deleted_at"],
                "where_values": ["7", "IS NULL"],
                "where_types": ["int", "datetime"],
                "join_operators": ["and", "and"]
            }"#,
        )
        .unwrap();
        let sql = SqlBuilder::default().build_request(&request).unwrap();
        assert_eq!(
            sql,
            "UPDATE users\nSET\n name = 'Jane'\nWHERE\n id = 7 AND deleted_at IS NULL\n"
        );
    }

    #[test]
    fn test_request_unknown_type_name() {
        let request = StatementRequest::Insert {
            table: "T".into(),
            columns: vec!["a".into()],
            types: vec!["uuid".into()],
            rows: vec![vec!["1".into()]],
            strategy: InsertStrategy::ValuesList,
        };
        let err = SqlBuilder::default().build_request(&request).unwrap_err();
        assert!(matches!(err, Error::UnsupportedColumnType { .. }));
    }

    #[test]
    fn test_request_unknown_operator() {
        let request = StatementRequest::Delete {
            table: "T".into(),
            columns: vec!["a".into()],
            values: vec!["1".into()],
            types: vec!["int".into()],
            join_operators: vec!["XOR".into()],
        };
        let err = SqlBuilder::default().build_request(&request).unwrap_err();
        assert!(matches!(err, Error::UnknownJoinOperator { .. }));
    }

    #[test]
    fn test_request_xml_overrides() {
        let request = StatementRequest::XmlQuery {
            query: "SELECT 1 FOR XML AUTO".into(),
            variable: Some("@DOC".into()),
            generate_select: Some(true),
        };
        let sql = SqlBuilder::new(BuilderConfig::default().with_xml_select(false))
            .build_request(&request)
            .unwrap();
        assert!(sql.ends_with("SELECT @DOC AS DOC\n"));
    }
}
