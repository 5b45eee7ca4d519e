//! Core address checking functionality
//!
//! This module contains the decode-validate-classify pipeline: the
//! base58 decoder, the checksum validator, the payload classifier, and
//! the orchestrator tying them together.

pub mod base58;
pub mod checksum;
pub mod classify;
pub mod pipeline;

pub use base58::{base58_decode, ALPHABET};
pub use checksum::{compute_checksum, verify_checksum, CHECKSUM_LEN};
pub use classify::{classify, AddressKind, ACCOUNT_ADDRESS_LEN, PUBLIC_KEY_LEN};
pub use pipeline::{check_address, Report, DEFAULT_PREFIX};
