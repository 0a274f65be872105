// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur while serialising an [`ExceptionReport`].
///
/// Only the fallible render paths surface these. [`ReportBuilder::build`]
/// never fails and falls back to a minimal document instead.
///
/// [`ExceptionReport`]: crate::ExceptionReport
/// [`ReportBuilder::build`]: crate::ReportBuilder::build
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The XML serializer rejected the document.
    #[error("failed to serialize report as XML: {0}")]
    Xml(#[from] quick_xml::SeError),

    /// The YAML serializer rejected the document.
    #[error("failed to serialize report as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON serializer rejected the document.
    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
