use regex::Regex;
use thiserror::Error;

/// Thousands delimiter inserted every three digits: `'.'`.
pub const DELIMITER: char = '.';

/// Separator preceding the check character: `'-'`.
pub const SEPARATOR: char = '-';

/// Validation errors for RUT text.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When the identifier begins with the digit zero.
    #[error("invalid RUT format: '{value}' must not start with zero")]
    LeadingZero {
        /// Offending value.
        value: String,
    },
    /// When the stripped text is not 1-9 digits plus an optional check character.
    #[error("invalid RUT format: '{value}' is not digits followed by an optional check character")]
    BadShape {
        /// Offending value.
        value: String,
    },
    /// When an operation must locate a check character the input does not carry.
    #[error("missing check digit in '{value}'")]
    MissingCheckDigit {
        /// Offending value.
        value: String,
    },
}

/// Removes every delimiter and separator from `text`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| *c != DELIMITER && *c != SEPARATOR)
        .collect()
}

/// Removes every delimiter from `text`, leaving the separator and check
/// character untouched.
pub fn strip_delimiters(text: &str) -> String {
    text.chars().filter(|c| *c != DELIMITER).collect()
}

/// Checks `text` against the RUT shape rules.
///
/// Accepts 1-9 digits plus an optional trailing check character (`0`-`9`,
/// `k`, or `K`) once delimiters and the separator are removed. The check
/// digit itself is never verified here; that is `rutkit-core`'s job.
pub fn validate_format(text: &str) -> Result<(), ValidationError> {
    if text.starts_with('0') {
        return Err(ValidationError::LeadingZero {
            value: text.to_string(),
        });
    }

    let cleaned = strip_punctuation(text);
    let re = Regex::new(r"^[0-9]{1,9}[0-9kK]?$").expect("invalid regex");
    if !re.is_match(&cleaned) {
        return Err(ValidationError::BadShape {
            value: text.to_string(),
        });
    }

    Ok(())
}
