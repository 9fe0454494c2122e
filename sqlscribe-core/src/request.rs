//! Serialized build requests
//!
//! A [`StatementRequest`] describes one build call as data, with column types
//! and join operators spelled as strings, so callers can keep statement
//! templates in JSON documents.

use serde::{Deserialize, Serialize};

use crate::builder::InsertStrategy;
use crate::{ColumnType, Result};

/// One build call, tagged by `"operation"`
///
/// ```
/// use sqlscribe_core::{SqlBuilder, StatementRequest};
///
/// let request = StatementRequest::from_json(r#"{
///     "operation": "delete",
///     "table": "users",
///     "columns": ["id"],
///     "values": ["7"],
///     "types": ["int"],
///     "join_operators": ["AND"]
/// }"#).unwrap();
///
/// let sql = SqlBuilder::default().build_request(&request).unwrap();
/// assert_eq!(sql, "DELETE FROM users\nWHERE\n id = 7\n");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum StatementRequest {
    Insert {
        table: String,
        columns: Vec<String>,
        types: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        strategy: InsertStrategy,
    },
    Update {
        table: String,
        set_columns: Vec<String>,
        set_values: Vec<String>,
        set_types: Vec<String>,
        where_columns: Vec<String>,
        where_values: Vec<String>,
        where_types: Vec<String>,
        join_operators: Vec<String>,
    },
    Delete {
        table: String,
        columns: Vec<String>,
        values: Vec<String>,
        types: Vec<String>,
        join_operators: Vec<String>,
    },
    XmlQuery {
        query: String,
        #[serde(default)]
        variable: Option<String>,
        #[serde(default)]
        generate_select: Option<bool>,
    },
}

impl StatementRequest {
    /// Decode a request from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the request as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Resolve type names; the first unknown name fails with `UnsupportedColumnType`
pub fn parse_column_types<S: AsRef<str>>(names: &[S]) -> Result<Vec<ColumnType>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}
