// SPDX-License-Identifier: MIT OR Apache-2.0
//! Report assembly and serialisation.

use crate::{ExceptionCode, ReportError, ReportFormat, ReportProfile, ServiceException};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, error};

/// Standard XML declaration written before every XML report.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Number of spaces per nesting level in XML output.
pub const DEFAULT_INDENT: usize = 1;

// ---------------------------------------------------------------------------
// ExceptionReport
// ---------------------------------------------------------------------------

/// A service exception report: fixed protocol metadata plus the ordered
/// exceptions to return to the client.
///
/// The YAML and JSON renderings serialise this type directly, and clients
/// may deserialise them back. A deserialised report carries whatever
/// metadata the document held, so it cannot be rendered as-is: feed
/// [`ExceptionReport::into_exceptions`] to a [`ReportBuilder`], which stamps
/// its own [`ReportProfile`] onto every document it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExceptionReport<C> {
    service: String,
    version: String,
    xmlns: String,
    xsi: String,
    #[serde(rename = "schemaLocation")]
    schema_location: String,
    exceptions: Vec<ServiceException<C>>,
}

impl<C: ExceptionCode> ExceptionReport<C> {
    fn stamped(profile: &ReportProfile, exceptions: Vec<ServiceException<C>>) -> Self {
        Self {
            service: profile.service().to_owned(),
            version: profile.version().to_owned(),
            xmlns: profile.namespace().to_owned(),
            xsi: profile.schema_instance().to_owned(),
            schema_location: profile.schema_location().to_owned(),
            exceptions,
        }
    }

    /// Service identifier.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Protocol version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Default XML namespace.
    pub fn xmlns(&self) -> &str {
        &self.xmlns
    }

    /// XML Schema instance namespace.
    pub fn xsi(&self) -> &str {
        &self.xsi
    }

    /// Schema location pair.
    pub fn schema_location(&self) -> &str {
        &self.schema_location
    }

    /// The exceptions, in the order they were supplied.
    pub fn exceptions(&self) -> &[ServiceException<C>] {
        &self.exceptions
    }

    /// Number of exceptions in the report.
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    /// `true` when the report carries no exceptions.
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }

    /// Consume the report, yielding its exceptions for re-rendering.
    pub fn into_exceptions(self) -> Vec<ServiceException<C>> {
        self.exceptions
    }

    // Crate-private: rendered documents always come from a ReportBuilder.

    /// XML: [`XML_HEADER`] followed by the document indented by `indent`
    /// spaces per level (`0` renders on a single line).
    pub(crate) fn to_xml(&self, indent: usize) -> Result<Vec<u8>, ReportError> {
        let view = XmlReport {
            version: &self.version,
            xmlns: &self.xmlns,
            xsi: &self.xsi,
            schema_location: &self.schema_location,
            exceptions: self
                .exceptions
                .iter()
                .map(|e| XmlException {
                    code: e.code().as_str(),
                    locator: e.locator().map(xml_chars),
                    text: e.text().map(xml_chars),
                })
                .collect(),
        };

        let mut body = String::new();
        let mut ser = quick_xml::se::Serializer::new(&mut body);
        if indent > 0 {
            ser.indent(' ', indent);
        }
        view.serialize(ser)?;

        let mut out = Vec::with_capacity(XML_HEADER.len() + body.len());
        out.extend_from_slice(XML_HEADER.as_bytes());
        out.extend_from_slice(body.as_bytes());
        Ok(out)
    }

    pub(crate) fn to_yaml(&self) -> Result<Vec<u8>, ReportError> {
        Ok(serde_yaml::to_string(self)?.into_bytes())
    }

    /// Pretty-printed JSON.
    pub(crate) fn to_json(&self) -> Result<Vec<u8>, ReportError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// `indent` only affects XML.
    pub(crate) fn render(&self, format: ReportFormat, indent: usize) -> Result<Vec<u8>, ReportError> {
        match format {
            ReportFormat::Xml => self.to_xml(indent),
            ReportFormat::Yaml => self.to_yaml(),
            ReportFormat::Json => self.to_json(),
        }
    }
}

// Borrowed XML view. Attribute and text mapping follows quick-xml's `@name`
// and `$text` conventions.

#[derive(Serialize)]
#[serde(rename = "ServiceExceptionReport")]
struct XmlReport<'a> {
    #[serde(rename = "@version")]
    version: &'a str,
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    #[serde(rename = "@xmlns:xsi")]
    xsi: &'a str,
    #[serde(rename = "@xsi:schemaLocation")]
    schema_location: &'a str,
    #[serde(rename = "ServiceException")]
    exceptions: Vec<XmlException<'a>>,
}

#[derive(Serialize)]
struct XmlException<'a> {
    #[serde(rename = "@code")]
    code: &'a str,
    #[serde(rename = "@locator", skip_serializing_if = "Option::is_none")]
    locator: Option<Cow<'a, str>>,
    #[serde(rename = "$text", skip_serializing_if = "Option::is_none")]
    text: Option<Cow<'a, str>>,
}

/// Replace characters outside the XML 1.0 `Char` production with U+FFFD.
/// Escaping cannot make them legal.
fn xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(
            s.chars()
                .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
                .collect(),
        )
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

// ---------------------------------------------------------------------------
// ReportBuilder
// ---------------------------------------------------------------------------

/// Turns a sequence of exceptions into a rendered report for one protocol
/// version.
///
/// The builder is `Copy` and holds no per-request state, so one instance can
/// serve any number of concurrent handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportBuilder {
    profile: ReportProfile,
    indent: usize,
}

impl ReportBuilder {
    /// Create a builder stamping `profile` onto every report.
    pub const fn new(profile: ReportProfile) -> Self {
        Self {
            profile,
            indent: DEFAULT_INDENT,
        }
    }

    /// Override the XML indentation width.
    #[must_use]
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    /// The injected profile.
    pub fn profile(&self) -> &ReportProfile {
        &self.profile
    }

    /// XML indentation width.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Assemble the in-memory report, preserving caller order.
    pub fn report<C, I>(&self, exceptions: I) -> ExceptionReport<C>
    where
        C: ExceptionCode,
        I: IntoIterator<Item = ServiceException<C>>,
    {
        ExceptionReport::stamped(&self.profile, exceptions.into_iter().collect())
    }

    /// Render the XML response body.
    ///
    /// Never fails. Should serialisation be rejected, the failure is logged
    /// and a header plus an empty report root is returned instead.
    pub fn build<C, I>(&self, exceptions: I) -> Vec<u8>
    where
        C: ExceptionCode,
        I: IntoIterator<Item = ServiceException<C>>,
    {
        let report = self.report(exceptions);
        self.log_render(report.len(), ReportFormat::Xml);
        match report.to_xml(self.indent) {
            Ok(body) => body,
            Err(err) => {
                error!(
                    target: "ogc.report",
                    service = self.profile.service(),
                    version = self.profile.version(),
                    error = %err,
                    "report serialization failed; returning empty report"
                );
                self.fallback_document()
            }
        }
    }

    /// Render the report in any supported format.
    pub fn render<C, I>(&self, exceptions: I, format: ReportFormat) -> Result<Vec<u8>, ReportError>
    where
        C: ExceptionCode,
        I: IntoIterator<Item = ServiceException<C>>,
    {
        let report = self.report(exceptions);
        self.log_render(report.len(), format);
        report.render(format, self.indent)
    }

    fn log_render(&self, count: usize, format: ReportFormat) {
        debug!(
            target: "ogc.report",
            service = self.profile.service(),
            version = self.profile.version(),
            exceptions = count,
            %format,
            "rendering service exception report"
        );
    }

    fn fallback_document(&self) -> Vec<u8> {
        let p = &self.profile;
        format!(
            "{XML_HEADER}<ServiceExceptionReport version=\"{}\" xmlns=\"{}\" xmlns:xsi=\"{}\" xsi:schemaLocation=\"{}\"/>",
            p.version(),
            p.namespace(),
            p.schema_instance(),
            p.schema_location()
        )
        .into_bytes()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
