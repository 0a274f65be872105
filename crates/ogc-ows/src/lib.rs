// SPDX-License-Identifier: MIT OR Apache-2.0
//! Protocol-independent service exception reporting for OGC web services.
//!
//! A protocol module (for example WMS 1.3.0) supplies two things:
//!
//! * a closed enum implementing [`ExceptionCode`], the fixed vocabulary of
//!   error kinds for that protocol version, and
//! * a [`ReportProfile`] holding the constant metadata (service, version,
//!   namespaces, schema location) stamped onto every report.
//!
//! Request handling code builds [`ServiceException`] values and hands them to
//! a [`ReportBuilder`], which renders an [`ExceptionReport`] as XML, YAML or
//! JSON.
//!
//! ```
//! use ogc_ows::{ExceptionCode, ReportBuilder, ReportProfile, ServiceException};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
//! enum Code {
//!     NoApplicableCode,
//! }
//!
//! impl ExceptionCode for Code {
//!     fn as_str(&self) -> &'static str {
//!         "NoApplicableCode"
//!     }
//! }
//!
//! impl std::fmt::Display for Code {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str(self.as_str())
//!     }
//! }
//!
//! const PROFILE: ReportProfile = ReportProfile::new(
//!     "WMS",
//!     "1.3.0",
//!     "http://www.opengis.net/ogc",
//!     "http://www.w3.org/2001/XMLSchema-instance",
//!     "http://www.opengis.net/ogc http://schemas.opengis.net/wms/1.3.0/exceptions_1_3_0.xsd",
//! );
//!
//! let body = ReportBuilder::new(PROFILE)
//!     .build(vec![ServiceException::new(Code::NoApplicableCode).with_text("boom")]);
//! assert!(String::from_utf8(body).unwrap().contains("boom"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod code;
mod error;
mod exception;
mod format;
mod profile;
mod report;

pub use code::ExceptionCode;
pub use error::ReportError;
pub use exception::ServiceException;
pub use format::ReportFormat;
pub use profile::ReportProfile;
pub use report::{DEFAULT_INDENT, ExceptionReport, ReportBuilder, XML_HEADER};
