//! # Addr Check - Graphene Address Diagnostic Tool
//!
//! Decodes a Graphene-style ("BTS...") public key or account address
//! string, verifies the RIPEMD-160 checksum embedded in it, and reports
//! what the payload looks like.
//!
//! ## How the Code Is Organized
//! - `core/`: the decode-validate-classify pipeline (base58 decoder,
//!   checksum validator, payload classifier, orchestrator)
//! - `cli/`: command-line argument parsing
//! - `error/`: error types shared across the pipeline
//! - `utils/`: cryptographic digest helpers
//!
//! ## Key Design Decisions
//! - The pipeline never prints or exits; `main.rs` owns all
//!   presentation, so every stage is unit-testable on its own.
//! - The checksum is a single truncated RIPEMD-160 over the payload,
//!   the Graphene scheme, not Bitcoin's double-SHA-256 Base58Check.
//! - An unexpected payload length is a warning, not a failure; the
//!   tool is a diagnostic, not a key validator.

pub mod cli;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::cli::Opt;
pub use crate::core::{
    base58_decode, check_address, classify, compute_checksum, verify_checksum, AddressKind,
    Report, CHECKSUM_LEN, DEFAULT_PREFIX,
};
pub use crate::error::{AddressError, Result};
pub use crate::utils::ripemd160_digest;
