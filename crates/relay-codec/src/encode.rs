//! EVM word encoding
//!
//! Converts integers into fixed 32-byte big-endian words, unsigned or
//! two's-complement signed, and assembles word sequences into calldata.

use num_bigint::{BigInt, Sign};
use relay_primitives::constants::MAX_UINT256;
use relay_primitives::Word;

use crate::CodecError;

/// Encode a `u64` as an EVM word: big-endian in the low 8 bytes, the high
/// 24 bytes zero. Never fails.
pub fn encode_u64(value: u64) -> Word {
    let mut bytes = [0u8; Word::LEN];
    bytes[Word::LEN - 8..].copy_from_slice(&value.to_be_bytes());
    Word::from_bytes(bytes)
}

/// Encode a non-negative integer as an unsigned EVM word.
///
/// Returns [`CodecError::Negative`] for negative input and
/// [`CodecError::Overflow`] when the magnitude exceeds
/// [`MAX_UINT256`].
pub fn encode_uint(value: &BigInt) -> Result<Word, CodecError> {
    if value.sign() == Sign::Minus {
        return Err(CodecError::Negative(value.clone()));
    }
    let (_, magnitude) = value.to_bytes_be();
    if magnitude.len() > Word::LEN {
        return Err(CodecError::Overflow(value.clone()));
    }
    Ok(left_pad(&magnitude))
}

/// Encode an integer as a signed EVM word, two's complement over 256 bits.
///
/// Returns [`CodecError::Overflow`] when the magnitude needs more than
/// 255 bits. Non-negative values encode exactly as [`encode_uint`] does;
/// negative values encode as `(MAX_UINT256 + value) + 1`.
pub fn encode_int(value: &BigInt) -> Result<Word, CodecError> {
    if value.bits() > (Word::LEN as u64) * 8 - 1 {
        return Err(CodecError::Overflow(value.clone()));
    }
    let magnitude = if value.sign() == Sign::Minus {
        let twos_complement = (&*MAX_UINT256 + value) + 1u32;
        twos_complement.to_bytes_be().1
    } else {
        value.to_bytes_be().1
    };
    Ok(left_pad(&magnitude))
}

/// Append the given buffers into a single byte sequence, in order.
pub fn concat_bytes(bufs: &[&[u8]]) -> Vec<u8> {
    let total = bufs.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for buf in bufs {
        out.extend_from_slice(buf);
    }
    out
}

/// Compute a function selector: the first 4 bytes of
/// `keccak256(signature)`.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = relay_crypto::keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Prepend a function selector to an encoded argument payload.
pub fn encode_function_call(selector: [u8; 4], payload: &[u8]) -> Vec<u8> {
    concat_bytes(&[&selector, payload])
}

// Callers guarantee `bytes` is at most 32 long.
fn left_pad(bytes: &[u8]) -> Word {
    let mut word = [0u8; Word::LEN];
    word[Word::LEN - bytes.len()..].copy_from_slice(bytes);
    Word::from_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::Sign;
    use proptest::prelude::*;
    use relay_primitives::constants::{MAX_INT256, MIN_INT256};

    fn decode_unsigned(word: &Word) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, word.as_bytes())
    }

    // ==================== encode_u64 ====================

    #[test]
    fn test_encode_u64_zero() {
        assert_eq!(encode_u64(0), Word::ZERO);
    }

    #[test]
    fn test_encode_u64_small() {
        let word = encode_u64(1);
        assert_eq!(word.as_bytes()[31], 1);
        assert_eq!(&word.as_bytes()[..31], &[0u8; 31]);
    }

    #[test]
    fn test_encode_u64_max() {
        let word = encode_u64(u64::MAX);
        assert_eq!(&word.as_bytes()[24..], &[0xff; 8]);
        assert_eq!(&word.as_bytes()[..24], &[0u8; 24]);
    }

    // ==================== encode_uint ====================

    #[test]
    fn test_encode_uint_basic() {
        let word = encode_uint(&BigInt::from(26)).unwrap();
        assert_eq!(word.as_bytes()[31], 26);
    }

    #[test]
    fn test_encode_uint_max() {
        let word = encode_uint(&MAX_UINT256).unwrap();
        assert_eq!(word.as_bytes(), &[0xff; 32]);
    }

    #[test]
    fn test_encode_uint_overflow() {
        let too_big = &*MAX_UINT256 + 1u32;
        match encode_uint(&too_big) {
            Err(CodecError::Overflow(v)) => assert_eq!(v, too_big),
            other => panic!("expected Overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_uint_negative() {
        match encode_uint(&BigInt::from(-1)) {
            Err(CodecError::Negative(v)) => assert_eq!(v, BigInt::from(-1)),
            other => panic!("expected Negative, got {:?}", other),
        }
    }

    // ==================== encode_int ====================

    #[test]
    fn test_encode_int_positive_matches_uint() {
        let value = BigInt::from(1234567890u64);
        assert_eq!(
            encode_int(&value).unwrap(),
            encode_uint(&value).unwrap()
        );
    }

    #[test]
    fn test_encode_int_minus_one() {
        let word = encode_int(&BigInt::from(-1)).unwrap();
        assert_eq!(word.as_bytes(), &[0xff; 32]);
    }

    #[test]
    fn test_encode_int_minus_five() {
        let word = encode_int(&BigInt::from(-5)).unwrap();
        assert_eq!(word.as_bytes()[31], 0xfb);
        assert_eq!(&word.as_bytes()[..31], &[0xff; 31]);
    }

    #[test]
    fn test_encode_int_bounds() {
        let max = encode_int(&MAX_INT256).unwrap();
        assert_eq!(max.as_bytes()[0], 0x7f);
        assert_eq!(&max.as_bytes()[1..], &[0xff; 31]);

        // MIN_INT256 = -(2^255 - 1) encodes as 0x80..01
        let min = encode_int(&MIN_INT256).unwrap();
        assert_eq!(min.as_bytes()[0], 0x80);
        assert_eq!(&min.as_bytes()[1..31], &[0u8; 30]);
        assert_eq!(min.as_bytes()[31], 0x01);
    }

    #[test]
    fn test_encode_int_overflow() {
        for value in [&*MAX_INT256 + 1u32, &*MIN_INT256 - 1u32] {
            match encode_int(&value) {
                Err(CodecError::Overflow(_)) => {}
                other => panic!("expected Overflow, got {:?}", other),
            }
        }
    }

    // ==================== concat / selector ====================

    #[test]
    fn test_concat_bytes() {
        assert_eq!(concat_bytes(&[]), Vec::<u8>::new());
        assert_eq!(
            concat_bytes(&[&[1, 2], &[], &[3]]),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_function_selector() {
        assert_eq!(
            function_selector("transfer(address,uint256)"),
            [0xa9, 0x05, 0x9c, 0xbb]
        );
        assert_eq!(
            function_selector("balanceOf(address)"),
            [0x70, 0xa0, 0x82, 0x31]
        );
    }

    #[test]
    fn test_encode_function_call() {
        let selector = function_selector("balanceOf(address)");
        let payload = encode_u64(7);
        let call = encode_function_call(selector, payload.as_bytes());
        assert_eq!(call.len(), 36);
        assert_eq!(&call[..4], &selector);
        assert_eq!(call[35], 7);
    }

    // ==================== round-trip properties ====================

    proptest! {
        #[test]
        fn prop_u64_words_round_trip(v in any::<u64>()) {
            let word = encode_u64(v);
            prop_assert_eq!(&word.as_bytes()[..24], &[0u8; 24]);
            let mut tail = [0u8; 8];
            tail.copy_from_slice(&word.as_bytes()[24..]);
            prop_assert_eq!(u64::from_be_bytes(tail), v);
        }

        #[test]
        fn prop_uint_words_round_trip(
            bytes in proptest::collection::vec(any::<u8>(), 0..=32)
        ) {
            let value = BigInt::from_bytes_be(Sign::Plus, &bytes);
            let word = encode_uint(&value).unwrap();
            prop_assert_eq!(decode_unsigned(&word), value);
        }

        #[test]
        fn prop_int_words_round_trip(v in any::<i128>()) {
            let value = BigInt::from(v);
            let word = encode_int(&value).unwrap();
            prop_assert_eq!(BigInt::from_signed_bytes_be(word.as_bytes()), value);
        }
    }
}
