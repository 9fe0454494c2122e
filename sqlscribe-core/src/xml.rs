//! Wrapping of `FOR XML` queries into an XML variable

use std::sync::OnceLock;

use regex::Regex;

use crate::builder::common::{QueryBuilder, StatementWriter};
use crate::config::{LineEnding, DEFAULT_XML_VARIABLE};
use crate::{Error, Result};

fn for_xml_pattern() -> &'static Regex {
    static FOR_XML_RE: OnceLock<Regex> = OnceLock::new();
    FOR_XML_RE.get_or_init(|| {
        Regex::new(r"(?i)for\s+xml\s+.+").expect("invalid built-in FOR XML regex")
    })
}

/// Returns `true` if `sql` carries a `FOR XML <mode>` clause
pub fn is_xml_query(sql: &str) -> bool {
    for_xml_pattern().is_match(sql)
}

/// Builder turning a `SELECT ... FOR XML ...` query into one whose XML result
/// lands in a T-SQL variable
///
/// # Examples
/// ```
/// use sqlscribe_core::{QueryBuilder, XmlQuery};
///
/// let sql = XmlQuery::new("SELECT * FROM t FOR XML AUTO").to_sql().unwrap();
/// assert_eq!(
///     sql,
///     "DECLARE @XML_QUERY_RESULT AS XML = ''\n\
///      SET @XML_QUERY_RESULT = (SELECT * FROM t FOR XML AUTO)\n\
///      SELECT @XML_QUERY_RESULT AS XML_QUERY_RESULT\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct XmlQuery {
    query: String,
    variable: String,
    generate_select: bool,
    line_ending: LineEnding,
}

impl XmlQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            variable: DEFAULT_XML_VARIABLE.to_string(),
            generate_select: true,
            line_ending: LineEnding::default(),
        }
    }

    /// Variable receiving the XML, sigil included (`@NAME`)
    pub fn variable(mut self, variable: &str) -> Self {
        self.variable = variable.to_string();
        self
    }

    /// Whether to finish with `SELECT @NAME AS NAME`
    pub fn generate_select(mut self, generate: bool) -> Self {
        self.generate_select = generate;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

impl QueryBuilder for XmlQuery {
    fn to_sql(&self) -> Result<String> {
        if !is_xml_query(&self.query) {
            tracing::debug!(query = %self.query, "query has no FOR XML clause");
            return Err(Error::not_an_xml_query(&self.query));
        }

        let variable = &self.variable;
        let mut writer = StatementWriter::new(self.line_ending);
        writer.line(&format!("DECLARE {variable} AS XML = ''"));
        writer.line(&format!("SET {variable} = ({})", self.query));
        if self.generate_select {
            let alias = variable.strip_prefix('@').unwrap_or(variable);
            writer.line(&format!("SELECT {variable} AS {alias}"));
        }
        Ok(writer.finish())
    }
}
