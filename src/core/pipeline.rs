//! The decode-validate-classify pipeline
//!
//! Strips the network prefix, base58-decodes the remainder, splits off
//! and verifies the checksum suffix, and classifies the payload. Every
//! step is a hard failure point; there are no partial results and no
//! retries. The pipeline never prints or exits, so the caller decides
//! how to present a report or a failure.

use data_encoding::HEXLOWER;

use crate::core::base58::base58_decode;
use crate::core::checksum::{compute_checksum, CHECKSUM_LEN};
use crate::core::classify::{classify, AddressKind};
use crate::error::{AddressError, Result};

/// Default network prefix for Graphene/BitShares addresses
pub const DEFAULT_PREFIX: &str = "BTS";

/// Everything the caller needs to present a successful check
#[derive(Debug, Clone)]
pub struct Report {
    /// Full base58-decoded bytes, payload plus checksum
    pub decoded: Vec<u8>,
    /// Decoded bytes minus the checksum suffix
    pub payload: Vec<u8>,
    /// Checksum carried by the address
    pub checksum: [u8; CHECKSUM_LEN],
    /// First four bytes of ripemd160(payload)
    pub expected_checksum: [u8; CHECKSUM_LEN],
    /// Length-based classification of the payload
    pub kind: AddressKind,
}

/// Run the full pipeline over a raw address string.
pub fn check_address(raw: &str, prefix: &str) -> Result<Report> {
    let encoded = raw
        .strip_prefix(prefix)
        .ok_or_else(|| AddressError::MissingPrefix {
            prefix: prefix.to_string(),
        })?;

    let decoded = base58_decode(encoded)?;

    // 4 checksum bytes plus at least 1 payload byte
    if decoded.len() < CHECKSUM_LEN + 1 {
        return Err(AddressError::TooShort {
            length: decoded.len(),
        });
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected_checksum = compute_checksum(payload);
    if checksum != expected_checksum {
        return Err(AddressError::ChecksumMismatch {
            given: HEXLOWER.encode(checksum),
            expected: HEXLOWER.encode(&expected_checksum),
        });
    }

    let kind = classify(payload);
    let mut given = [0u8; CHECKSUM_LEN];
    given.copy_from_slice(checksum);
    let payload = payload.to_vec();

    Ok(Report {
        decoded,
        payload,
        checksum: given,
        expected_checksum,
        kind,
    })
}
