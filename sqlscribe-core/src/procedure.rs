//! Stored-procedure parameter helpers
//!
//! Nothing here talks to a database; the helpers only shape names and values
//! so a driver can bind them.

use serde::{Deserialize, Serialize};

use crate::builder::common::ensure_same_length;
use crate::Result;

/// A named procedure parameter and its string-encoded value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureParameter {
    pub name: String,
    pub value: String,
}

/// Pair parameter names with their values by position
///
/// # Errors
///
/// [`Error::ArityMismatch`](crate::Error::ArityMismatch) when the two inputs
/// differ in length.
pub fn procedure_parameters<N, V>(names: &[N], values: &[V]) -> Result<Vec<ProcedureParameter>>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    ensure_same_length(
        "procedure parameters",
        names.len(),
        "procedure parameter values",
        values.len(),
    )?;
    Ok(names
        .iter()
        .zip(values)
        .map(|(name, value)| ProcedureParameter {
            name: name.as_ref().to_string(),
            value: value.as_ref().to_string(),
        })
        .collect())
}

/// Flatten rows of items into one delimited string for server-side splitting
///
/// The first row writes each item followed by `item_separator`. Every later
/// row writes `item_separator` before each item plus one more after its last
/// item. Rows are joined by `row_separator`.
///
/// # Examples
/// ```
/// use sqlscribe_core::table_parameter;
///
/// let flat = table_parameter(&[vec!["a", "b"], vec!["c", "d"]], ";", "|");
/// assert_eq!(flat, "a|b|;|c|d|");
/// ```
pub fn table_parameter<R, S>(rows: &[R], row_separator: &str, item_separator: &str) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut flat = String::new();

    for (i, row) in rows.iter().enumerate() {
        let items = row.as_ref();
        if i == 0 {
            for item in items {
                flat.push_str(item.as_ref());
                flat.push_str(item_separator);
            }
        } else {
            for item in items {
                flat.push_str(item_separator);
                flat.push_str(item.as_ref());
            }
            if !items.is_empty() {
                flat.push_str(item_separator);
            }
        }

        if i + 1 < rows.len() {
            flat.push_str(row_separator);
        }
    }

    flat
}
