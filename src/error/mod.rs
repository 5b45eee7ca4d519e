//! Error handling for the address checker
//!
//! This module provides error types for every stage of the
//! decode-validate-classify pipeline.

use std::fmt;

/// Result type alias for address checking operations
pub type Result<T> = std::result::Result<T, AddressError>;

/// Errors raised while checking an address
#[derive(Debug, Clone)]
pub enum AddressError {
    /// Input does not start with the expected network prefix
    MissingPrefix { prefix: String },
    /// Invalid base58 encoding
    Decode { character: char, position: usize },
    /// Decoded data too short to hold a checksum and a payload
    TooShort { length: usize },
    /// Checksum suffix does not match the payload digest
    ChecksumMismatch { given: String, expected: String },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::MissingPrefix { prefix } => {
                write!(f, "missing prefix '{prefix}'")
            }
            AddressError::Decode {
                character,
                position,
            } => {
                write!(
                    f,
                    "Base58 decode failed: invalid character '{character}' at position {position}"
                )
            }
            AddressError::TooShort { length } => {
                write!(f, "decoded data too short: {length} bytes")
            }
            AddressError::ChecksumMismatch { given, expected } => {
                write!(
                    f,
                    "invalid checksum: given chk={given}, expected: ripemd160(payload)={expected}"
                )
            }
        }
    }
}

impl std::error::Error for AddressError {}
