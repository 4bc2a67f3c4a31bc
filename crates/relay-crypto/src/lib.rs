//! # relay-crypto
//!
//! Keccak-256 hashing, the legacy SHA3 variant Ethereum uses for function
//! selectors and calldata digests.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
