//! Codec error types

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced while encoding values for the EVM.
///
/// Every variant is a deterministic function of the input; none are
/// transient, so the caller must fix the input rather than retry.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Unknown format tag
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// JSON kind not supported by the selected conversion path
    #[error("unsupported encoding for value: {0}")]
    UnsupportedValue(&'static str),

    /// Malformed numeric string
    #[error("error parsing {0}")]
    Parse(String),

    /// Magnitude does not fit the 256-bit word
    #[error("overflow saving {0} to EVM word")]
    Overflow(BigInt),

    /// Negative value supplied where an unsigned word is required
    #[error("uint256 cannot be negative: {0}")]
    Negative(BigInt),
}
