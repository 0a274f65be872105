// SPDX-License-Identifier: MIT OR Apache-2.0
//! WMS 1.3.0 service exceptions.
//!
//! This crate fixes the WMS 1.3.0 [`ExceptionCode`] vocabulary, provides one
//! constructor per code and supported argument count, and renders
//! `ServiceExceptionReport` documents stamped with the WMS 1.3.0 namespace and
//! schema location.
//!
//! ```
//! use ogc_wms130::{invalid_crs_for_layer, layer_not_queryable_by_name, report};
//!
//! let body = report(vec![
//!     invalid_crs_for_layer("EPSG:9999", "roads"),
//!     layer_not_queryable_by_name("roads"),
//! ]);
//! let xml = String::from_utf8(body).unwrap();
//! assert!(xml.contains(r#"code="InvalidCRS""#));
//! assert!(xml.contains(r#"locator="roads""#));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod code;
mod exception;

pub use code::ExceptionCode;
pub use exception::*;

use ogc_ows::{ExceptionReport, ReportBuilder, ReportProfile};

/// Service identifier.
pub const SERVICE: &str = "WMS";

/// Protocol version.
pub const VERSION: &str = "1.3.0";

/// Default namespace of WMS 1.3.0 exception reports.
pub const NAMESPACE: &str = "http://www.opengis.net/ogc";

/// XML Schema instance namespace.
pub const SCHEMA_INSTANCE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Namespace and XSD location of the exception report schema.
pub const SCHEMA_LOCATION: &str =
    "http://www.opengis.net/ogc http://schemas.opengis.net/wms/1.3.0/exceptions_1_3_0.xsd";

/// Report metadata stamped onto every WMS 1.3.0 exception report.
pub const PROFILE: ReportProfile =
    ReportProfile::new(SERVICE, VERSION, NAMESPACE, SCHEMA_INSTANCE, SCHEMA_LOCATION);

/// An assembled WMS 1.3.0 exception report.
pub type WmsReport = ExceptionReport<ExceptionCode>;

/// A report builder bound to [`PROFILE`].
pub const fn report_builder() -> ReportBuilder {
    ReportBuilder::new(PROFILE)
}

/// Render `exceptions` as a WMS 1.3.0 XML exception report.
pub fn report(exceptions: impl IntoIterator<Item = WmsException>) -> Vec<u8> {
    report_builder().build(exceptions)
}
