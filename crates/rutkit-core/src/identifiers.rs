use std::fmt;

use rutkit_canonical::forms;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::verification::{is_valid, split_check_digit};

/// Chilean RUT identifier text.
///
/// [`Rut::parse`] requires both a valid shape and a matching check digit;
/// [`Rut::new`] stores the text as-is for callers that have already
/// validated it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rut(String);

impl Rut {
    /// Creates a new instance without validation; callers are responsible
    /// for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a verified identifier from a string.
    ///
    /// Fails if the text is malformed or its check digit does not match the
    /// computed one.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let s = value.into();
        if !is_valid(&s)? {
            return Err(CoreError::CheckDigitMismatch { value: s });
        }
        Ok(Self(s))
    }

    /// Delimiter-stripped digit run, without the check character.
    ///
    /// Empty when the text cannot be split into digits and check character.
    pub fn digits(&self) -> String {
        split_check_digit(&self.0)
            .map(|(digits, _)| digits)
            .unwrap_or_default()
    }

    /// The supplied check character, uppercased. `None` when the text does
    /// not carry one.
    pub fn check_digit(&self) -> Option<char> {
        split_check_digit(&self.0)
            .ok()
            .map(|(_, check)| check.to_ascii_uppercase())
    }
}

impl From<String> for Rut {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Rut {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rut {
    /// Renders the canonical grouped + separated form; text that cannot be
    /// normalized is rendered verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match forms::normalize(&self.0) {
            Ok(canonical) => f.write_str(&canonical),
            Err(_) => f.write_str(&self.0),
        }
    }
}
