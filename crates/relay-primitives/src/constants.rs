//! Range bounds for 256-bit EVM integers
//!
//! Computed once on first access, immutable and process-wide afterwards.
//! There is no teardown; the values live for the process lifetime and are
//! safe to read from any number of threads.

use num_bigint::BigInt;
use once_cell::sync::Lazy;

/// Largest number representable by an EVM word, `2^256 - 1`.
pub static MAX_UINT256: Lazy<BigInt> = Lazy::new(|| (BigInt::from(1) << 256usize) - 1);

/// Largest number representable by an EVM word using signed encoding,
/// `2^255 - 1`.
pub static MAX_INT256: Lazy<BigInt> = Lazy::new(|| &*MAX_UINT256 / 2);

/// Smallest number representable by an EVM word using signed encoding.
///
/// The negation of [`MAX_INT256`]: the signed encoder rejects any magnitude
/// that needs more than 255 bits, which puts `-(2^255)` itself out of range.
pub static MIN_INT256: Lazy<BigInt> = Lazy::new(|| -&*MAX_INT256);
