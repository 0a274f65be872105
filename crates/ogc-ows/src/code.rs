// SPDX-License-Identifier: MIT OR Apache-2.0
//! The seam between the generic report machinery and a protocol version's
//! error vocabulary.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::hash::Hash;

/// A machine-readable exception code drawn from a fixed, version-specific
/// vocabulary.
///
/// Implementors are closed enums. The string returned by [`as_str`] is the
/// value written into the `code` attribute of a rendered report and must
/// match the identifier defined by the protocol standard exactly.
///
/// [`as_str`]: ExceptionCode::as_str
pub trait ExceptionCode:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Stable `&'static str` wire representation (e.g. `"InvalidCRS"`).
    fn as_str(&self) -> &'static str;
}
