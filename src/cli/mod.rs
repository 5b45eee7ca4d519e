//! Command-line interface
//!
//! This module contains the argument parsing for the address checker
//! binary.

pub mod commands;

pub use commands::Opt;
