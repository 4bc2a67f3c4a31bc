//! The EVM word type

use std::fmt;
use thiserror::Error;

/// Word construction error
#[derive(Debug, Error)]
pub enum WordError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid word length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected byte count (always [`Word::LEN`])
        expected: usize,
        /// Byte count actually supplied
        got: usize,
    },
}

/// A fixed 32-byte big-endian EVM word.
///
/// Always exactly 32 bytes, left-padded with zeros. Unsigned words cover
/// `[0, 2^256 - 1]`; signed words use two's complement over 256 bits.
/// Words are transient values: constructed per call, never mutated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word([u8; 32]);

impl Word {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// All-zero word
    pub const ZERO: Word = Word([0u8; 32]);

    /// Create from a byte array
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Word(bytes)
    }

    /// Create from a slice, checking the length
    pub fn from_slice(slice: &[u8]) -> Result<Self, WordError> {
        if slice.len() != Self::LEN {
            return Err(WordError::InvalidLength {
                expected: Self::LEN,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Word(bytes))
    }

    /// Parse from a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, WordError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| WordError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as a byte array
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out into an owned byte vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Convert to a lowercase `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.to_hex())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Word {
    fn from(bytes: [u8; 32]) -> Self {
        Word(bytes)
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
