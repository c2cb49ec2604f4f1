use rutkit_canonical::{strip_delimiters, validate_format, SEPARATOR};

use crate::errors::CoreError;

/// Cyclic weights applied to the reversed digit run: `[2, 3, 4, 5, 6, 7]`.
const WEIGHT_CYCLE: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Input accepted by [`compute_check_digit`]: identifier text in any
/// canonical form, or the digit portion as a plain number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckDigitInput {
    /// Identifier text, with or without delimiters and separator.
    Text(String),
    /// The digit portion as an unsigned integer.
    Number(u64),
}

impl From<&str> for CheckDigitInput {
    fn from(value: &str) -> Self {
        CheckDigitInput::Text(value.to_string())
    }
}

impl From<String> for CheckDigitInput {
    fn from(value: String) -> Self {
        CheckDigitInput::Text(value)
    }
}

impl From<u64> for CheckDigitInput {
    fn from(value: u64) -> Self {
        CheckDigitInput::Number(value)
    }
}

impl From<u32> for CheckDigitInput {
    fn from(value: u32) -> Self {
        CheckDigitInput::Number(u64::from(value))
    }
}

/// Error during check digit computation.
#[derive(thiserror::Error, Debug)]
pub enum CheckDigitError {
    /// The digit portion was empty or contained non-digit characters.
    #[error("invalid digit portion in '{value}'")]
    InvalidDigits {
        /// Offending identifier text.
        value: String,
    },
}

/// Computes the check character for a RUT digit run.
///
/// Formula: módulo 11 weighted sum over the reversed digit run with cyclic
/// weights `2..=7`; `11 - (sum % 11)` maps `11` to `'0'`, `10` to `'K'`, and
/// anything else to its decimal digit.
///
/// Text input is re-validated and stripped first: delimiters are removed,
/// and a separator plus supplied check character, if present, is dropped so
/// only the digit run is summed.
pub fn compute_check_digit(input: impl Into<CheckDigitInput>) -> Result<char, CoreError> {
    let text = match input.into() {
        CheckDigitInput::Text(text) => text,
        CheckDigitInput::Number(number) => number.to_string(),
    };
    validate_format(&text)?;

    let cleaned = strip_delimiters(&text);
    let digits = match cleaned.split_once(SEPARATOR) {
        Some((digits, _)) => digits.to_string(),
        None => cleaned,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckDigitError::InvalidDigits { value: text }.into());
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(idx, digit)| u32::from(digit - b'0') * WEIGHT_CYCLE[idx % WEIGHT_CYCLE.len()])
        .sum();

    Ok(match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        digit => char::from_digit(digit, 10).expect("single digit"),
    })
}
