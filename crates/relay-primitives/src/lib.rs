//! # relay-primitives
//!
//! Primitive types for the relay EVM codec.
//!
//! This crate provides the fixed 32-byte [`Word`] that all EVM calldata is
//! built from, the process-wide 256-bit range [`constants`], and the
//! `0x`-prefix helpers used when parsing hex strings.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod hex_prefix;
mod word;

pub use hex_prefix::{add_hex_prefix, has_hex_prefix, remove_hex_prefix};
pub use word::{Word, WordError};

// Re-export num-bigint for BigInt
pub use num_bigint::BigInt;
