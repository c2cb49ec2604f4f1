//! Check digit computation and verification for Chilean RUT identifiers.
//!
//! This crate provides:
//! - Módulo 11 check digit computation over the digit run
//! - Verification of supplied check characters (`is_valid`)
//! - The verified [`Rut`] newtype
//!
//! Core invariants:
//! - Computation and verification are deterministic, synchronous, and pure
//! - Formatting never recomputes a check digit; only this crate touches the
//!   checksum
//! - Malformed input fails with a structured error; verification never maps
//!   it to `false`
//!
#![deny(missing_docs)]

/// Módulo 11 check digit computation.
pub mod check_digit;
/// Error types for core operations.
pub mod errors;
/// Verified RUT identifier newtype.
pub mod identifiers;
/// Verification of supplied check characters.
pub mod verification;

pub use check_digit::{compute_check_digit, CheckDigitError, CheckDigitInput};
pub use errors::CoreError;
pub use identifiers::Rut;
pub use verification::is_valid;
