//! Utility functions and helpers
//!
//! This module contains the cryptographic digest helper used by the
//! checksum validator.

pub mod crypto;

pub use crypto::ripemd160_digest;
