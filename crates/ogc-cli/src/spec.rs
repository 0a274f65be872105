// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parsing of `--exception` arguments.

use ogc_wms130::{ExceptionCode, WmsException, from_args};
use std::fmt;
use std::str::FromStr;

/// One exception requested on the command line.
///
/// Syntax: `CODE` or `CODE=ARG[,ARG...]`. Everything after the first `=` is
/// split on commas, so `InvalidCRS=EPSG:4326,roads` carries two arguments and
/// `StyleNotDefined=` carries a single empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionSpec {
    pub code: ExceptionCode,
    pub args: Vec<String>,
}

impl ExceptionSpec {
    /// `true` when a message template exists for this argument count.
    pub fn arity_supported(&self) -> bool {
        self.code.supported_arities().contains(&self.args.len())
    }

    pub fn to_exception(&self) -> WmsException {
        from_args(self.code, &self.args)
    }
}

impl FromStr for ExceptionSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, args) = match s.split_once('=') {
            Some((code, rest)) => (code, rest.split(',').map(str::to_owned).collect()),
            None => (s, Vec::new()),
        };
        let code = code.trim().parse::<ExceptionCode>()?;
        Ok(Self { code, args })
    }
}

impl fmt::Display for ExceptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code.as_str())?;
        if !self.args.is_empty() {
            write!(f, "={}", self.args.join(","))?;
        }
        Ok(())
    }
}

/// Render a list of arities as `0, 1 or 2`.
pub fn describe_arities(arities: &[usize]) -> String {
    match arities {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}
