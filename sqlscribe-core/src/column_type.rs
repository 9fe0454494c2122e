//! Declared column types and their literal quoting convention

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Quantifier wrapped around text-like literals
pub const APOSTROPHE: &str = "'";

/// Declared value type of a column
///
/// The type decides the quantifier placed around a rendered value:
/// an apostrophe for text-like kinds, nothing for numeric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Boolean value
    Boolean,
    /// Single character
    Char,
    /// Date and/or time
    DateTime,
    /// Character string
    String,
    /// Any other reference value, rendered as text
    Object,
    /// Signed 8-bit integer
    SByte,
    /// Unsigned 8-bit integer
    Byte,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 16-bit integer
    UInt16,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 32-bit integer
    UInt32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 64-bit integer
    UInt64,
    /// 32-bit float
    Single,
    /// 64-bit float
    Double,
    /// Fixed-point decimal
    Decimal,
    /// No type at all; has no quoting convention
    Empty,
    /// Database null marker; has no quoting convention
    DbNull,
}

impl ColumnType {
    /// Resolve the quantifier for this column type
    ///
    /// # Errors
    ///
    /// `Empty` and `DbNull` carry no literal form and fail with
    /// [`Error::UnsupportedColumnType`].
    pub fn quantifier(&self) -> Result<&'static str> {
        match self {
            ColumnType::Boolean
            | ColumnType::Char
            | ColumnType::DateTime
            | ColumnType::String
            | ColumnType::Object => Ok(APOSTROPHE),
            ColumnType::SByte
            | ColumnType::Byte
            | ColumnType::Int16
            | ColumnType::UInt16
            | ColumnType::Int32
            | ColumnType::UInt32
            | ColumnType::Int64
            | ColumnType::UInt64
            | ColumnType::Single
            | ColumnType::Double
            | ColumnType::Decimal => Ok(""),
            ColumnType::Empty | ColumnType::DbNull => {
                Err(Error::unsupported_column_type(self.name()))
            }
        }
    }

    /// True for kinds rendered between apostrophes
    pub fn is_quoted(&self) -> bool {
        matches!(self.quantifier(), Ok(q) if !q.is_empty())
    }

    /// True for kinds rendered bare
    pub fn is_numeric(&self) -> bool {
        matches!(self.quantifier(), Ok(""))
    }

    /// Canonical type name
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "Boolean",
            ColumnType::Char => "Char",
            ColumnType::DateTime => "DateTime",
            ColumnType::String => "String",
            ColumnType::Object => "Object",
            ColumnType::SByte => "SByte",
            ColumnType::Byte => "Byte",
            ColumnType::Int16 => "Int16",
            ColumnType::UInt16 => "UInt16",
            ColumnType::Int32 => "Int32",
            ColumnType::UInt32 => "UInt32",
            ColumnType::Int64 => "Int64",
            ColumnType::UInt64 => "UInt64",
            ColumnType::Single => "Single",
            ColumnType::Double => "Double",
            ColumnType::Decimal => "Decimal",
            ColumnType::Empty => "Empty",
            ColumnType::DbNull => "DBNull",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Accepts canonical names and the usual SQL / Rust aliases, case-insensitively
impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let column_type = match s.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" | "bit" => ColumnType::Boolean,
            "char" | "character" => ColumnType::Char,
            "datetime" | "date" | "time" | "timestamp" => ColumnType::DateTime,
            "string" | "text" | "varchar" | "nvarchar" | "nchar" => ColumnType::String,
            "object" => ColumnType::Object,
            "sbyte" | "i8" => ColumnType::SByte,
            "byte" | "u8" | "tinyint" => ColumnType::Byte,
            "int16" | "i16" | "smallint" => ColumnType::Int16,
            "uint16" | "u16" => ColumnType::UInt16,
            "int32" | "i32" | "int" | "integer" => ColumnType::Int32,
            "uint32" | "u32" => ColumnType::UInt32,
            "int64" | "i64" | "bigint" | "long" => ColumnType::Int64,
            "uint64" | "u64" => ColumnType::UInt64,
            "single" | "f32" | "float" | "real" => ColumnType::Single,
            "double" | "f64" => ColumnType::Double,
            "decimal" | "numeric" | "money" => ColumnType::Decimal,
            "empty" => ColumnType::Empty,
            "dbnull" => ColumnType::DbNull,
            _ => return Err(Error::unsupported_column_type(s)),
        };
        Ok(column_type)
    }
}
