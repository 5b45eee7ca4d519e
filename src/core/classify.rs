//! Payload classification
//!
//! Pure length-based dispatch: 33 bytes is a compressed public key,
//! 20 bytes is an account address (RIPEMD-160 of a public key).
//! Anything else is reported rather than rejected; this is a
//! diagnostic tool, not a validator of key well-formedness.

use std::fmt;

/// Payload length of a compressed public key
pub const PUBLIC_KEY_LEN: usize = 33;

/// Payload length of an account address
pub const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Semantic type of a decoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PublicKey,
    AccountAddress,
    Unknown,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::PublicKey => write!(f, "Public Key"),
            AddressKind::AccountAddress => write!(f, "Account Address (RIPEMD160(pubkey))"),
            AddressKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Classify a payload by its length. Total over every length, never fails.
pub fn classify(payload: &[u8]) -> AddressKind {
    match payload.len() {
        PUBLIC_KEY_LEN => AddressKind::PublicKey,
        ACCOUNT_ADDRESS_LEN => AddressKind::AccountAddress,
        _ => AddressKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_length() {
        assert_eq!(classify(&[0u8; 33]), AddressKind::PublicKey);
    }

    #[test]
    fn test_account_address_length() {
        assert_eq!(classify(&[0u8; 20]), AddressKind::AccountAddress);
    }

    #[test]
    fn test_total_over_all_lengths() {
        for len in 0..=64usize {
            let kind = classify(&vec![0u8; len]);
            match len {
                33 => assert_eq!(kind, AddressKind::PublicKey),
                20 => assert_eq!(kind, AddressKind::AccountAddress),
                _ => assert_eq!(kind, AddressKind::Unknown),
            }
        }
    }
}
