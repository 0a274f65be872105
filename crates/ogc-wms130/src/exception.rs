// SPDX-License-Identifier: MIT OR Apache-2.0
//! One constructor per exception code and supported argument count.
//!
//! Constructors never fail. Codes for which the standard defines no message
//! produce code-only exceptions.

use crate::ExceptionCode;
use ogc_ows::ServiceException;
use tracing::debug;

/// A WMS 1.3.0 service exception.
pub type WmsException = ServiceException<ExceptionCode>;

/// Generic explanation returned by [`style_not_defined`] when the offending
/// style and layer are unknown. A single line: the two sentences are joined
/// by one space.
pub const STYLES_CORRESPONDENCE_TEXT: &str = "There is a one-to-one correspondence between the values in the LAYERS parameter and the values in the STYLES parameter. Expecting an empty string for the STYLES like STYLES= or comma-separated list STYLES=,,, or using keyword default STYLES=default,default,...";

/// `InvalidFormat` for an unsupported image format.
pub fn invalid_format(format: &str) -> WmsException {
    WmsException::new(ExceptionCode::InvalidFormat)
        .with_text(format!("The format: {format}, is a invalid image format"))
}

/// Code-only `InvalidCRS`.
pub fn invalid_crs() -> WmsException {
    WmsException::new(ExceptionCode::InvalidCrs)
}

/// `InvalidCRS` for a CRS the service does not know at all.
pub fn invalid_crs_for_service(crs: &str) -> WmsException {
    WmsException::new(ExceptionCode::InvalidCrs)
        .with_text(format!("CRS is not known by this service: {crs}"))
}

/// `InvalidCRS` for a CRS a specific layer does not offer.
pub fn invalid_crs_for_layer(crs: &str, layer: &str) -> WmsException {
    WmsException::new(ExceptionCode::InvalidCrs)
        .with_text(format!("The CRS: {crs} is not known by the layer: {layer}"))
}

/// Code-only `LayerNotDefined`.
pub fn layer_not_defined() -> WmsException {
    WmsException::new(ExceptionCode::LayerNotDefined)
}

/// `LayerNotDefined` naming the unknown layer.
pub fn layer_not_defined_by_name(layer: &str) -> WmsException {
    WmsException::new(ExceptionCode::LayerNotDefined)
        .with_text(format!("The layer: {layer} is not known by the server"))
}

/// `StyleNotDefined` with the generic STYLES/LAYERS correspondence rule.
pub fn style_not_defined() -> WmsException {
    WmsException::new(ExceptionCode::StyleNotDefined).with_text(STYLES_CORRESPONDENCE_TEXT)
}

/// `StyleNotDefined` for a style the given layer does not offer.
pub fn style_not_defined_for_layer(style: &str, layer: &str) -> WmsException {
    WmsException::new(ExceptionCode::StyleNotDefined).with_text(format!(
        "The style: {style} is not known by the server for the layer: {layer}"
    ))
}

/// Code-only `LayerNotQueryable`.
pub fn layer_not_queryable() -> WmsException {
    WmsException::new(ExceptionCode::LayerNotQueryable)
}

/// `LayerNotQueryable` naming the layer, which also becomes the locator.
pub fn layer_not_queryable_by_name(layer: &str) -> WmsException {
    WmsException::new(ExceptionCode::LayerNotQueryable)
        .with_text(format!("Layer: {layer}, can not be queried"))
        .with_locator(layer)
}

/// `InvalidPoint` echoing the raw I and J values.
///
/// The values are taken as strings so that non-numeric input can be returned
/// to the client verbatim.
pub fn invalid_point(i: &str, j: &str) -> WmsException {
    // TODO: include the request WIDTH and HEIGHT once callers pass them through.
    WmsException::new(ExceptionCode::InvalidPoint).with_text(format!(
        "The parameters I and J are invalid, given: {i} for I and {j} for J"
    ))
}

/// Code-only `CurrentUpdateSequence`.
pub fn current_update_sequence() -> WmsException {
    WmsException::new(ExceptionCode::CurrentUpdateSequence)
}

/// Code-only `InvalidUpdateSequence`.
pub fn invalid_update_sequence() -> WmsException {
    WmsException::new(ExceptionCode::InvalidUpdateSequence)
}

/// Code-only `MissingDimensionValue`.
pub fn missing_dimension_value() -> WmsException {
    WmsException::new(ExceptionCode::MissingDimensionValue)
}

/// Code-only `InvalidDimensionValue`.
pub fn invalid_dimension_value() -> WmsException {
    WmsException::new(ExceptionCode::InvalidDimensionValue)
}

/// Code-only `OperationNotSupported`.
pub fn operation_not_supported() -> WmsException {
    WmsException::new(ExceptionCode::OperationNotSupported)
}

/// `OperationNotSupported` naming the operation, which also becomes the
/// locator.
pub fn operation_not_supported_by_name(operation: &str) -> WmsException {
    WmsException::new(ExceptionCode::OperationNotSupported)
        .with_text(format!(
            "The operation: {operation} is not supported by this service"
        ))
        .with_locator(operation)
}

/// The form `code` takes when no message template matches the available
/// arguments.
///
/// This is the code-only exception for every code except `StyleNotDefined`,
/// which falls back to [`STYLES_CORRESPONDENCE_TEXT`].
pub fn fallback(code: ExceptionCode) -> WmsException {
    match code {
        ExceptionCode::StyleNotDefined => style_not_defined(),
        other => WmsException::new(other),
    }
}

/// Build an exception when the number of context arguments is only known at
/// runtime.
///
/// Every `(code, argument count)` pair listed by
/// [`ExceptionCode::supported_arities`] maps to its explicit constructor.
/// Any other count yields [`fallback`]`(code)`; nothing is rejected.
pub fn from_args<S: AsRef<str>>(code: ExceptionCode, args: &[S]) -> WmsException {
    use ExceptionCode as C;

    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    match (code, args.as_slice()) {
        (C::InvalidFormat, [format]) => invalid_format(format),
        (C::InvalidCrs, []) => invalid_crs(),
        (C::InvalidCrs, [crs]) => invalid_crs_for_service(crs),
        (C::InvalidCrs, [crs, layer]) => invalid_crs_for_layer(crs, layer),
        (C::LayerNotDefined, []) => layer_not_defined(),
        (C::LayerNotDefined, [layer]) => layer_not_defined_by_name(layer),
        (C::StyleNotDefined, []) => style_not_defined(),
        (C::StyleNotDefined, [style, layer]) => style_not_defined_for_layer(style, layer),
        (C::LayerNotQueryable, []) => layer_not_queryable(),
        (C::LayerNotQueryable, [layer]) => layer_not_queryable_by_name(layer),
        (C::InvalidPoint, [i, j]) => invalid_point(i, j),
        (C::CurrentUpdateSequence, []) => current_update_sequence(),
        (C::InvalidUpdateSequence, []) => invalid_update_sequence(),
        (C::MissingDimensionValue, []) => missing_dimension_value(),
        (C::InvalidDimensionValue, []) => invalid_dimension_value(),
        (C::OperationNotSupported, []) => operation_not_supported(),
        (C::OperationNotSupported, [operation]) => operation_not_supported_by_name(operation),
        (code, args) => {
            debug!(
                target: "ogc.wms130",
                %code,
                args = args.len(),
                supported = ?code.supported_arities(),
                "unsupported argument count; using fallback exception"
            );
            fallback(code)
        }
    }
}
