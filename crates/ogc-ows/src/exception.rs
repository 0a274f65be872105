// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::ExceptionCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single structured, user-facing service exception.
///
/// Carries a stable code, an optional human-readable text and an optional
/// locator naming the request parameter, layer or style responsible for the
/// error. The fields are private: once built, a value cannot be changed.
///
/// ```
/// # use ogc_ows::{ExceptionCode, ServiceException};
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// # enum Code { LayerNotQueryable }
/// # impl ExceptionCode for Code { fn as_str(&self) -> &'static str { "LayerNotQueryable" } }
/// # impl std::fmt::Display for Code {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
/// # }
/// let err = ServiceException::new(Code::LayerNotQueryable)
///     .with_text("Layer: roads, can not be queried")
///     .with_locator("roads");
/// assert_eq!(err.locator(), Some("roads"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ServiceException<C> {
    code: C,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locator: Option<String>,
}

impl<C: ExceptionCode> ServiceException<C> {
    /// A code-only exception with neither text nor locator.
    pub fn new(code: C) -> Self {
        Self {
            code,
            text: None,
            locator: None,
        }
    }

    /// Attach the human-readable exception text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach the locator identifying the offending parameter or entity.
    #[must_use]
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// The exception code.
    pub fn code(&self) -> C {
        self.code
    }

    /// The exception text, if the code carries one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The locator, if one was attached.
    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    /// `true` when the exception carries neither text nor locator.
    pub fn is_code_only(&self) -> bool {
        self.text.is_none() && self.locator.is_none()
    }
}

impl<C: ExceptionCode> fmt::Display for ServiceException<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => f.write_str(text),
            None => f.write_str(self.code.as_str()),
        }
    }
}

impl<C: ExceptionCode> std::error::Error for ServiceException<C> {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
    pub(crate) enum TestCode {
        InvalidFormat,
        #[serde(rename = "InvalidCRS")]
        InvalidCrs,
    }

    impl ExceptionCode for TestCode {
        fn as_str(&self) -> &'static str {
            match self {
                Self::InvalidFormat => "InvalidFormat",
                Self::InvalidCrs => "InvalidCRS",
            }
        }
    }

    impl fmt::Display for TestCode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[test]
    fn new_is_code_only() {
        let err = ServiceException::new(TestCode::InvalidCrs);
        assert_eq!(err.code(), TestCode::InvalidCrs);
        assert_eq!(err.text(), None);
        assert_eq!(err.locator(), None);
        assert!(err.is_code_only());
    }

    #[test]
    fn builders_attach_text_and_locator() {
        let err = ServiceException::new(TestCode::InvalidFormat)
            .with_text("bad format")
            .with_locator("FORMAT");
        assert_eq!(err.text(), Some("bad format"));
        assert_eq!(err.locator(), Some("FORMAT"));
        assert!(!err.is_code_only());
    }

    #[test]
    fn display_prefers_text() {
        let err = ServiceException::new(TestCode::InvalidFormat).with_text("bad format");
        assert_eq!(err.to_string(), "bad format");
    }

    #[test]
    fn display_falls_back_to_code() {
        let err = ServiceException::new(TestCode::InvalidCrs);
        assert_eq!(err.to_string(), "InvalidCRS");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ServiceException::new(TestCode::InvalidCrs));
    }

    #[test]
    fn json_omits_absent_fields() {
        let err = ServiceException::new(TestCode::InvalidCrs);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"code": "InvalidCRS"}));
    }

    #[test]
    fn json_roundtrip_with_locator() {
        let err = ServiceException::new(TestCode::InvalidCrs)
            .with_text("nope")
            .with_locator("CRS");
        let json = serde_json::to_string(&err).unwrap();
        let back: ServiceException<TestCode> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
