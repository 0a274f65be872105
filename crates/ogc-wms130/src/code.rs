// SPDX-License-Identifier: MIT OR Apache-2.0
//! The WMS 1.3.0 exception code vocabulary (Annex E of the standard).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Machine-readable WMS 1.3.0 exception code.
///
/// Each variant serialises to the exact identifier defined by the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum ExceptionCode {
    /// Request contains a Format not offered by the server.
    InvalidFormat,
    /// Request contains a CRS not offered by the server for one or more of
    /// the Layers in the request.
    #[serde(rename = "InvalidCRS")]
    InvalidCrs,
    /// GetMap request is for a Layer not offered by the server, or
    /// GetFeatureInfo request is for a Layer not shown on the map.
    LayerNotDefined,
    /// Request is for a Layer in a Style not offered by the server.
    StyleNotDefined,
    /// GetFeatureInfo request is applied to a Layer which is not declared
    /// queryable.
    LayerNotQueryable,
    /// GetFeatureInfo request contains invalid I or J value.
    InvalidPoint,
    /// Value of (optional) UpdateSequence parameter in GetCapabilities request
    /// is equal to current value of service metadata update sequence number.
    CurrentUpdateSequence,
    /// Value of (optional) UpdateSequence parameter in GetCapabilities request
    /// is greater than current value of service metadata update sequence
    /// number.
    InvalidUpdateSequence,
    /// Request does not include a sample dimension value, and the server did
    /// not declare a default value for that dimension.
    MissingDimensionValue,
    /// Request contains an invalid sample dimension value.
    InvalidDimensionValue,
    /// Request is for an optional operation that is not supported by the
    /// server.
    OperationNotSupported,
}

impl ExceptionCode {
    /// Every WMS 1.3.0 exception code, in the order the standard lists them.
    pub const ALL: &'static [ExceptionCode] = &[
        Self::InvalidFormat,
        Self::InvalidCrs,
        Self::LayerNotDefined,
        Self::StyleNotDefined,
        Self::LayerNotQueryable,
        Self::InvalidPoint,
        Self::CurrentUpdateSequence,
        Self::InvalidUpdateSequence,
        Self::MissingDimensionValue,
        Self::InvalidDimensionValue,
        Self::OperationNotSupported,
    ];

    /// Stable wire identifier (e.g. `"InvalidCRS"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "InvalidFormat",
            Self::InvalidCrs => "InvalidCRS",
            Self::LayerNotDefined => "LayerNotDefined",
            Self::StyleNotDefined => "StyleNotDefined",
            Self::LayerNotQueryable => "LayerNotQueryable",
            Self::InvalidPoint => "InvalidPoint",
            Self::CurrentUpdateSequence => "CurrentUpdateSequence",
            Self::InvalidUpdateSequence => "InvalidUpdateSequence",
            Self::MissingDimensionValue => "MissingDimensionValue",
            Self::InvalidDimensionValue => "InvalidDimensionValue",
            Self::OperationNotSupported => "OperationNotSupported",
        }
    }

    /// One-line meaning of the code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "request contains a format not offered by the server",
            Self::InvalidCrs => "request contains a CRS not offered by the server for a layer",
            Self::LayerNotDefined => "request is for a layer not offered by the server",
            Self::StyleNotDefined => "request is for a layer in a style not offered by the server",
            Self::LayerNotQueryable => "GetFeatureInfo request is for a layer not declared queryable",
            Self::InvalidPoint => "GetFeatureInfo request contains an invalid I or J value",
            Self::CurrentUpdateSequence => "UpdateSequence equals the current metadata sequence",
            Self::InvalidUpdateSequence => "UpdateSequence is greater than the current metadata sequence",
            Self::MissingDimensionValue => "request omits a dimension value that has no default",
            Self::InvalidDimensionValue => "request contains an invalid sample dimension value",
            Self::OperationNotSupported => "request is for an optional operation the server does not support",
        }
    }

    /// Argument counts for which a message template exists. Any other count
    /// produces the code's fallback form (see [`crate::fallback`]).
    pub fn supported_arities(&self) -> &'static [usize] {
        match self {
            Self::InvalidFormat => &[1],
            Self::InvalidCrs => &[0, 1, 2],
            Self::LayerNotDefined | Self::LayerNotQueryable | Self::OperationNotSupported => {
                &[0, 1]
            }
            Self::StyleNotDefined => &[0, 2],
            Self::InvalidPoint => &[2],
            Self::CurrentUpdateSequence
            | Self::InvalidUpdateSequence
            | Self::MissingDimensionValue
            | Self::InvalidDimensionValue => &[0],
        }
    }
}

impl ogc_ows::ExceptionCode for ExceptionCode {
    fn as_str(&self) -> &'static str {
        ExceptionCode::as_str(self)
    }
}

impl fmt::Display for ExceptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExceptionCode {
    type Err = String;

    /// Exact, case-sensitive match on the wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("unknown WMS 1.3.0 exception code: {s}"))
    }
}
