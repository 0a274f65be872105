// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration loading and validation for exception report rendering.
//!
//! [`ReportConfig`] selects the output format, the XML indentation width and
//! the log level. It never touches report metadata: namespaces, schema
//! locations and versions are fixed by each protocol profile.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use ogc_ows::{DEFAULT_INDENT, ReportFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested configuration file was not found.
    #[error("config file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file could not be parsed as valid TOML.
    #[error("failed to parse config: {reason}")]
    ParseError {
        /// Human-readable parse error detail.
        reason: String,
    },

    /// Semantic validation failed (one or more problems).
    #[error("config validation failed: {reasons:?}")]
    ValidationError {
        /// Individual validation failure messages.
        reasons: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Advisory-level issues that do not prevent operation but deserve attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A recommended optional field is missing.
    MissingOptionalField {
        /// Name of the missing field.
        field: String,
        /// Why it matters.
        hint: String,
    },
    /// An environment override could not be parsed and was ignored.
    IgnoredEnvOverride {
        /// Variable name.
        var: String,
        /// Offending value.
        value: String,
    },
    /// XML output is rendered on a single line.
    UnindentedXml,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::MissingOptionalField { field, hint } => {
                write!(f, "missing optional field '{field}': {hint}")
            }
            ConfigWarning::IgnoredEnvOverride { var, value } => {
                write!(f, "ignored {var}='{value}': not a valid value")
            }
            ConfigWarning::UnindentedXml => {
                f.write_str("indent is 0; XML reports will be rendered on one line")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// Rendering configuration for service exception reports.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ReportConfig {
    /// Output format used when the caller does not choose one.
    #[serde(default)]
    pub format: ReportFormat,

    /// Spaces per nesting level in XML output (0 to 8).
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Log level override (e.g. `"debug"`, `"info"`, `"warn"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Xml,
            indent: DEFAULT_INDENT,
            log_level: Some("info".into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest accepted indentation width.
pub const MAX_INDENT: usize = 8;

/// Recognised log levels.
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Environment variable overriding [`ReportConfig::format`].
pub const ENV_FORMAT: &str = "OGC_REPORT_FORMAT";
/// Environment variable overriding [`ReportConfig::indent`].
pub const ENV_INDENT: &str = "OGC_REPORT_INDENT";
/// Environment variable overriding [`ReportConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "OGC_LOG_LEVEL";

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a [`ReportConfig`] from an optional TOML file path.
///
/// * If `path` is `Some`, reads and parses the file.
/// * If `path` is `None`, returns [`ReportConfig::default()`].
///
/// Environment variable overrides are applied on top in both cases; any
/// override that could not be applied is reported as a warning.
pub fn load_config(path: Option<&Path>) -> Result<(ReportConfig, Vec<ConfigWarning>), ConfigError> {
    load_config_with_env(path, |var| std::env::var(var).ok())
}

/// [`load_config`] with environment variables read through `lookup`.
pub fn load_config_with_env(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(ReportConfig, Vec<ConfigWarning>), ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                path: p.display().to_string(),
            })?;
            parse_toml(&content)?
        }
        None => ReportConfig::default(),
    };
    let warnings = apply_env_overrides(&mut config, lookup);
    Ok((config, warnings))
}

/// Parse a TOML string into a [`ReportConfig`].
pub fn parse_toml(content: &str) -> Result<ReportConfig, ConfigError> {
    toml::from_str::<ReportConfig>(content).map_err(|e| ConfigError::ParseError {
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Env overrides
// ---------------------------------------------------------------------------

/// Apply environment overrides read through `lookup`.
///
/// Recognised variables:
/// - `OGC_REPORT_FORMAT` (`xml`, `yaml`, `json`)
/// - `OGC_REPORT_INDENT` (unsigned integer)
/// - `OGC_LOG_LEVEL`
///
/// Unparseable values leave the config untouched and come back as
/// [`ConfigWarning::IgnoredEnvOverride`].
pub fn apply_env_overrides(
    config: &mut ReportConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    if let Some(val) = lookup(ENV_FORMAT) {
        match val.parse::<ReportFormat>() {
            Ok(format) => config.format = format,
            Err(_) => warnings.push(ConfigWarning::IgnoredEnvOverride {
                var: ENV_FORMAT.into(),
                value: val,
            }),
        }
    }
    if let Some(val) = lookup(ENV_INDENT) {
        match val.trim().parse::<usize>() {
            Ok(indent) => config.indent = indent,
            Err(_) => warnings.push(ConfigWarning::IgnoredEnvOverride {
                var: ENV_INDENT.into(),
                value: val,
            }),
        }
    }
    if let Some(val) = lookup(ENV_LOG_LEVEL) {
        config.log_level = Some(val);
    }
    warnings
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a parsed configuration, returning advisory warnings.
///
/// Hard errors (unknown log level, indentation out of range) are returned as
/// a [`ConfigError::ValidationError`]; soft issues come back as warnings.
pub fn validate_config(config: &ReportConfig) -> Result<Vec<ConfigWarning>, ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<ConfigWarning> = Vec::new();

    match &config.log_level {
        Some(level) if !VALID_LOG_LEVELS.contains(&level.as_str()) => {
            errors.push(format!("invalid log_level '{level}'"));
        }
        Some(_) => {}
        None => warnings.push(ConfigWarning::MissingOptionalField {
            field: "log_level".into(),
            hint: "logging falls back to 'info'".into(),
        }),
    }

    if config.indent > MAX_INDENT {
        errors.push(format!(
            "indent {} out of range (0..={MAX_INDENT})",
            config.indent
        ));
    } else if config.indent == 0 && config.format == ReportFormat::Xml {
        warnings.push(ConfigWarning::UnindentedXml);
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(ConfigError::ValidationError { reasons: errors })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
