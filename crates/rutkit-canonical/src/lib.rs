//! Canonical text primitives for Chilean RUT identifiers.
//!
//! A RUT is printed as a run of digits, delimited by `.` every three digits,
//! followed by `-` and a single check character (`0`-`9` or `K`). The same
//! identifier circulates in several equivalent shapes (`12.345.678-5`,
//! `12345678-5`, `123456785`, ...); this crate owns the textual side of that
//! format: shape validation, conversion between the canonical forms, and
//! cheap shape predicates.
//!
//! Conversions never compute or verify check digits; that lives in
//! `rutkit-core`.
//!
#![deny(missing_docs)]

/// Conversions between canonical RUT text forms.
pub mod forms;
/// Failure-free shape predicates over RUT text.
pub mod shape;
/// Format validation shared by every operation.
pub mod validation;

pub use forms::{
    convert, normalize, to_bare, to_bare_no_check, to_grouped_only, to_grouped_separated,
    to_separated_only, CanonicalForm,
};
pub use shape::{is_bare_digits, is_grouped_only, is_grouped_separated, is_separated_only};
pub use validation::{
    strip_delimiters, strip_punctuation, validate_format, ValidationError, DELIMITER, SEPARATOR,
};
