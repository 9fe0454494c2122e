//! Predicate join operators and reserved NULL clauses

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Boolean operator joining two WHERE-side predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinOperator {
    And,
    Or,
}

impl JoinOperator {
    /// Get the SQL keyword for the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOperator::And => "AND",
            JoinOperator::Or => "OR",
        }
    }
}

impl Display for JoinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JoinOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            op if op.eq_ignore_ascii_case("AND") => Ok(JoinOperator::And),
            op if op.eq_ignore_ascii_case("OR") => Ok(JoinOperator::Or),
            _ => Err(Error::unknown_join_operator(s)),
        }
    }
}

/// Predicate-only clause that may stand in for a value on the WHERE side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedClause {
    IsNull,
    IsNotNull,
}

impl ReservedClause {
    /// Recognise a reserved clause; surrounding whitespace is ignored, case is not
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "IS NULL" => Some(ReservedClause::IsNull),
            "IS NOT NULL" => Some(ReservedClause::IsNotNull),
            _ => None,
        }
    }

    /// Get the SQL text of the clause
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservedClause::IsNull => "IS NULL",
            ReservedClause::IsNotNull => "IS NOT NULL",
        }
    }
}

impl Display for ReservedClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convenience module for operator constants
pub mod op {
    use super::JoinOperator;

    pub const AND: JoinOperator = JoinOperator::And;
    pub const OR: JoinOperator = JoinOperator::Or;
}

/// Parse a list of operator strings, failing on the first unknown entry
pub fn parse_join_operators<S: AsRef<str>>(operators: &[S]) -> Result<Vec<JoinOperator>> {
    operators.iter().map(|op| op.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_keywords() {
        assert_eq!(JoinOperator::And.as_str(), "AND");
        assert_eq!(JoinOperator::Or.as_str(), "OR");
        assert_eq!(format!("{}", op::OR), "OR");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("AND".parse::<JoinOperator>().unwrap(), op::AND);
        assert_eq!(" or ".parse::<JoinOperator>().unwrap(), op::OR);
        assert_eq!("And".parse::<JoinOperator>().unwrap(), op::AND);
    }

    #[test]
    fn test_invalid_string_conversion() {
        let err = "XOR".parse::<JoinOperator>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown join operator 'XOR', expected AND or OR");
    }

    #[test]
    fn test_parse_join_operators_stops_on_unknown() {
        assert_eq!(
            parse_join_operators(&["AND", "OR"]).unwrap(),
            vec![op::AND, op::OR]
        );
        assert!(parse_join_operators(&["AND", "NAND"]).is_err());
    }

    #[test]
    fn test_reserved_clause_detection() {
        assert_eq!(ReservedClause::parse("IS NULL"), Some(ReservedClause::IsNull));
        assert_eq!(
            ReservedClause::parse("  IS NOT NULL "),
            Some(ReservedClause::IsNotNull)
        );
        assert_eq!(ReservedClause::parse("is null"), None);
        assert_eq!(ReservedClause::parse("NULL"), None);
    }

    #[test]
    fn test_serde_uppercase() {
        let ops: Vec<JoinOperator> = serde_json::from_str(r#"["AND","OR"]"#).unwrap();
        assert_eq!(ops, vec![op::AND, op::OR]);
    }
}
