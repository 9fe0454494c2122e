//! In-process builder configuration

use serde::{Deserialize, Serialize};

/// Default T-SQL variable receiving the result of an XML query
pub const DEFAULT_XML_VARIABLE: &str = "@XML_QUERY_RESULT";

/// Terminator appended to every emitted statement fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Settings shared by every statement a [`SqlBuilder`](crate::SqlBuilder) produces
///
/// Missing fields take their defaults, so the struct can be embedded in an
/// application's own configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Line terminator of emitted fragments
    pub line_ending: LineEnding,
    /// Variable used by the XML wrapper when none is given
    pub xml_variable: String,
    /// Whether the XML wrapper ends with a `SELECT` of the variable
    pub generate_xml_select: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            xml_variable: DEFAULT_XML_VARIABLE.to_string(),
            generate_xml_select: true,
        }
    }
}

impl BuilderConfig {
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_xml_variable(mut self, variable: impl Into<String>) -> Self {
        self.xml_variable = variable.into();
        self
    }

    pub fn with_xml_select(mut self, generate: bool) -> Self {
        self.generate_xml_select = generate;
        self
    }
}
