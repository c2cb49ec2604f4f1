use rutkit_canonical::{strip_punctuation, validate_format, ValidationError, DELIMITER, SEPARATOR};

use crate::check_digit::compute_check_digit;
use crate::errors::CoreError;

/// Splits validated identifier text into its digit run and supplied check
/// character.
///
/// With a separator the check character is the single character after it;
/// without one, the trailing character of the delimiter-stripped text.
pub(crate) fn split_check_digit(text: &str) -> Result<(String, char), CoreError> {
    if let Some((head, tail)) = text.split_once(SEPARATOR) {
        let mut rest = tail.chars();
        match (rest.next(), rest.next()) {
            (Some(check), None) => {
                let digits: String = head.chars().filter(|c| *c != DELIMITER).collect();
                Ok((digits, check))
            }
            _ => Err(ValidationError::BadShape {
                value: text.to_string(),
            }
            .into()),
        }
    } else {
        let cleaned = strip_punctuation(text);
        if cleaned.len() < 2 {
            return Err(ValidationError::MissingCheckDigit {
                value: text.to_string(),
            }
            .into());
        }
        let (digits, check) = cleaned.split_at(cleaned.len() - 1);
        let check = check.chars().next().expect("split at len - 1");
        Ok((digits.to_string(), check))
    }
}

/// Verifies a RUT against its supplied check character.
///
/// The input is validated, split into digit run and check character, and the
/// expected character is recomputed and compared case-insensitively.
/// Malformed input fails with the underlying error; it is never reported as
/// merely invalid.
pub fn is_valid(text: &str) -> Result<bool, CoreError> {
    validate_format(text)?;

    let (digits, supplied) = split_check_digit(text)?;
    let expected = compute_check_digit(digits)?;
    Ok(supplied.eq_ignore_ascii_case(&expected))
}
