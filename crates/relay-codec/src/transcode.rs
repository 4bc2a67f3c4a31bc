//! JSON-to-ABI transcoding
//!
//! Converts loosely-typed task results (parsed JSON values) into the byte
//! payloads a contract call expects. Each format tag selects one conversion
//! path; every path rejects JSON objects and arrays.

use num_bigint::BigInt;
use num_traits::{Num, Zero};
use serde_json::Value;

use relay_primitives::{has_hex_prefix, remove_hex_prefix, Word};

use crate::encode::{concat_bytes, encode_int, encode_u64, encode_uint};
use crate::{CodecError, Format};

/// Encode a parsed JSON value for the EVM according to a format tag.
pub fn transcode(value: &Value, format: Format) -> Result<Vec<u8>, CodecError> {
    match format {
        Format::Bytes => transcode_bytes(value),
        Format::Uint256 => transcode_uint256(value).map(|word| word.to_vec()),
        Format::Int256 => transcode_int256(value).map(|word| word.to_vec()),
        Format::Bool => transcode_bool(value).map(|word| word.to_vec()),
    }
}

/// Encode a JSON value as a dynamic EVM `bytes` argument.
///
/// Layout: offset word, length word, content, zero padding to the next
/// 32-byte boundary. The offset is hardcoded to 64, the hex-digit length of
/// one word, which is only correct while the encoded value is the sole
/// argument of the surrounding call. Content that already ends on a word
/// boundary still gets a full extra word of padding.
pub fn transcode_bytes(value: &Value) -> Result<Vec<u8>, CodecError> {
    let offset = encode_u64((Word::LEN * 2) as u64);
    match value {
        Value::String(s) => {
            let content = s.as_bytes();
            let padding = vec![0u8; Word::LEN - content.len() % Word::LEN];
            Ok(concat_bytes(&[
                offset.as_bytes(),
                encode_u64(content.len() as u64).as_bytes(),
                content,
                &padding,
            ]))
        }
        Value::Bool(flag) => Ok(concat_bytes(&[
            offset.as_bytes(),
            encode_u64(Word::LEN as u64).as_bytes(),
            encode_u64(u64::from(*flag)).as_bytes(),
        ])),
        Value::Number(n) => {
            let word = encode_int(&BigInt::from(number_as_f64(n) as i64))?;
            Ok(concat_bytes(&[
                offset.as_bytes(),
                encode_u64(Word::LEN as u64).as_bytes(),
                word.as_bytes(),
            ]))
        }
        other => Err(CodecError::UnsupportedValue(json_kind(other))),
    }
}

/// Encode a JSON value as an EVM `bool` word.
///
/// Numbers are true iff nonzero, strings iff non-empty; null is false.
pub fn transcode_bool(value: &Value) -> Result<Word, CodecError> {
    let bit = match value {
        Value::Number(n) => u64::from(number_as_f64(n) != 0.0),
        Value::String(s) => u64::from(!s.is_empty()),
        Value::Bool(flag) => u64::from(*flag),
        Value::Null => 0,
        other => return Err(CodecError::UnsupportedValue(json_kind(other))),
    };
    Ok(encode_u64(bit))
}

/// Encode a JSON value as an EVM `uint256` word.
///
/// Strings parse as hex behind a lowercase `0x` prefix, decimal otherwise;
/// numbers truncate through the float representation; null is zero.
/// Negative values are not pre-checked here: the sign error surfaces from
/// the unsigned encoder.
pub fn transcode_uint256(value: &Value) -> Result<Word, CodecError> {
    let quantity = match value {
        Value::String(s) => parse_quantity(s)?,
        Value::Number(n) => {
            let truncated = number_as_f64(n);
            if truncated < 0.0 {
                BigInt::from(truncated as i64)
            } else {
                BigInt::from(truncated as u64)
            }
        }
        Value::Null => BigInt::zero(),
        other => return Err(CodecError::UnsupportedValue(json_kind(other))),
    };
    encode_uint(&quantity)
}

/// Encode a JSON value as an EVM `int256` word.
///
/// Strings parse under the same rule as the `uint256` path; numbers
/// truncate to a signed 64-bit integer before widening; null is zero.
pub fn transcode_int256(value: &Value) -> Result<Word, CodecError> {
    let quantity = match value {
        Value::String(s) => parse_quantity(s)?,
        Value::Number(n) => BigInt::from(number_as_f64(n) as i64),
        Value::Null => BigInt::zero(),
        other => return Err(CodecError::UnsupportedValue(json_kind(other))),
    };
    encode_int(&quantity)
}

/// Parse a numeric string into an arbitrary-precision integer.
///
/// A lowercase `0x` prefix selects base 16 (digits case-insensitive);
/// everything else parses as base 10.
fn parse_quantity(s: &str) -> Result<BigInt, CodecError> {
    let parsed = if has_hex_prefix(s) {
        BigInt::from_str_radix(remove_hex_prefix(s), 16)
    } else {
        BigInt::from_str_radix(s, 10)
    };
    parsed.map_err(|_| CodecError::Parse(s.to_string()))
}

// JSON numbers take the float path regardless of how serde_json parsed
// them, matching the upstream task pipeline: integers above 2^53 lose
// low-order precision here.
fn number_as_f64(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
