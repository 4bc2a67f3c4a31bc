//! Output format tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Output format for a transcoded JSON value.
///
/// A closed set: dispatch over it is exhaustive, and any other tag string
/// is rejected at the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Dynamic byte array
    Bytes,
    /// Unsigned 256-bit integer
    Uint256,
    /// Signed 256-bit integer
    Int256,
    /// Boolean word
    Bool,
}

impl Format {
    /// The canonical tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Bytes => "bytes",
            Format::Uint256 => "uint256",
            Format::Int256 => "int256",
            Format::Bool => "bool",
        }
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(Format::Bytes),
            "uint256" => Ok(Format::Uint256),
            "int256" => Ok(Format::Int256),
            "bool" => Ok(Format::Bool),
            other => Err(CodecError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
