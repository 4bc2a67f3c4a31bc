//! # relay-codec
//!
//! Word-level EVM encoding and JSON-to-ABI transcoding.
//!
//! This crate turns loosely-typed task results (parsed JSON values) into
//! the fixed-width binary payloads a smart contract call expects. Four
//! format tags are supported: `bytes`, `uint256`, `int256` and `bool`.
//!
//! ## Example
//!
//! ```rust
//! use relay_codec::{encode_function_call, function_selector, transcode, Format};
//! use serde_json::json;
//!
//! // A task produced the result "26"; the fulfilling contract takes a
//! // uint256.
//! let payload = transcode(&json!("26"), Format::Uint256)?;
//! assert_eq!(payload.len(), 32);
//! assert_eq!(payload[31], 26);
//!
//! // Prepend the selector to get complete calldata.
//! let selector = function_selector("fulfill(uint256)");
//! let calldata = encode_function_call(selector, &payload);
//! assert_eq!(calldata.len(), 36);
//! # Ok::<(), relay_codec::CodecError>(())
//! ```
//!
//! All operations are pure functions over immutable inputs; the only
//! shared state is the read-only set of range constants in
//! [`relay_primitives::constants`], so concurrent use needs no locks.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod encode;
mod error;
mod format;
mod transcode;

pub use encode::{
    concat_bytes, encode_function_call, encode_int, encode_u64, encode_uint, function_selector,
};
pub use error::CodecError;
pub use format::Format;
pub use transcode::{transcode, transcode_bool, transcode_bytes, transcode_int256, transcode_uint256};

// Re-export primitives for convenience
pub use relay_primitives::{BigInt, Word};
