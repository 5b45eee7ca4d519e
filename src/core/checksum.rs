//! Payload checksum computation and verification
//!
//! Graphene addresses append the first four bytes of a single
//! RIPEMD-160 digest of the payload. This is not Base58Check, which
//! uses double SHA-256 over a versioned payload.

use crate::utils::ripemd160_digest;

/// Number of checksum bytes appended to the payload
pub const CHECKSUM_LEN: usize = 4;

/// Compute the 4-byte checksum of a payload.
pub fn compute_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = ripemd160_digest(payload);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
    checksum
}

/// Check a checksum against the payload it claims to cover.
pub fn verify_checksum(payload: &[u8], checksum: &[u8]) -> bool {
    checksum == compute_checksum(payload)
}
