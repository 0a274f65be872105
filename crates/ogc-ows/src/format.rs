// SPDX-License-Identifier: MIT OR Apache-2.0

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialization format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// OGC XML document with the standard header.
    #[default]
    Xml,
    /// YAML rendering of the same document.
    Yaml,
    /// Pretty-printed JSON rendering of the same document.
    Json,
}

impl ReportFormat {
    /// Every supported format.
    pub const ALL: &'static [ReportFormat] = &[Self::Xml, Self::Yaml, Self::Json];

    /// MIME type to send alongside a body in this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Xml => "text/xml",
            Self::Yaml => "application/yaml",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}
