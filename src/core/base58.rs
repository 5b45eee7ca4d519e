//! Base58 decoding
//!
//! Treats the encoded string as a big-endian base-58 numeral over the
//! Bitcoin alphabet (no 0, O, I, l). Leading '1' characters carry
//! zero-padding that the arithmetic alone would drop, so each one is
//! restored as a literal 0x00 byte in the output.

use num_bigint::BigUint;

use crate::error::{AddressError, Result};

/// Base58 alphabet (Bitcoin variant).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Build reverse alphabet lookup table at compile time. 0xFF = invalid.
const fn build_reverse_alphabet() -> [u8; 128] {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 58 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static REVERSE_ALPHABET: [u8; 128] = build_reverse_alphabet();

/// Decode a base58 string into the byte sequence it encodes.
///
/// Fails on any character outside the alphabet. The empty string
/// decodes to empty bytes.
pub fn base58_decode(s: &str) -> Result<Vec<u8>> {
    let mut value = BigUint::from(0u8);
    let mut leading_zeros = 0usize;
    let mut seen_nonzero = false;

    for (position, character) in s.char_indices() {
        let digit = if character.is_ascii() {
            REVERSE_ALPHABET[character as usize]
        } else {
            0xFF
        };
        if digit == 0xFF {
            return Err(AddressError::Decode {
                character,
                position,
            });
        }

        if digit == 0 && !seen_nonzero {
            leading_zeros += 1;
        } else {
            seen_nonzero = true;
        }

        value = value * 58u32 + digit;
    }

    let mut decoded = vec![0u8; leading_zeros];
    if value.bits() > 0 {
        decoded.extend_from_slice(&value.to_bytes_be());
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_decodes_to_empty_bytes() {
        assert_eq!(base58_decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_leading_ones_decode_to_zero_bytes() {
        assert_eq!(base58_decode("1").unwrap(), vec![0u8]);
        assert_eq!(base58_decode("111").unwrap(), vec![0u8; 3]);
    }

    #[test]
    fn test_known_vectors() {
        // Vectors from the base58 encoding draft
        assert_eq!(
            base58_decode("2NEpo7TZRRrLZSi2U").unwrap(),
            b"Hello World!".to_vec()
        );
        assert_eq!(
            base58_decode("USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z").unwrap(),
            b"The quick brown fox jumps over the lazy dog.".to_vec()
        );
        assert_eq!(
            base58_decode("11233QC4").unwrap(),
            vec![0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd]
        );
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        for input in ["0", "O", "I", "l", "abc!", "zz z"] {
            let err = base58_decode(input).unwrap_err();
            assert!(
                matches!(err, AddressError::Decode { .. }),
                "expected decode error for {input:?}"
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        let err = base58_decode("ab\u{00e9}cd").unwrap_err();
        match err {
            AddressError::Decode {
                character,
                position,
            } => {
                assert_eq!(character, '\u{00e9}');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_agrees_with_bs58_encoder() {
        let samples: Vec<Vec<u8>> = vec![
            vec![],
            vec![0x00],
            vec![0x00, 0x00, 0x01],
            vec![0xff; 8],
            (0u8..33).collect(),
            b"some payload bytes".to_vec(),
        ];
        for data in samples {
            let encoded = bs58::encode(&data).into_string();
            assert_eq!(base58_decode(&encoded).unwrap(), data);
        }
    }
}
