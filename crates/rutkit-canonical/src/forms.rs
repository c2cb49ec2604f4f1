use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::{
    strip_delimiters, strip_punctuation, validate_format, ValidationError, DELIMITER, SEPARATOR,
};

/// Canonical printed forms of a RUT.
///
/// Conversions are pure text transforms: the check character is carried as
/// supplied and never recomputed. Only `rutkit-core` touches the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalForm {
    /// Delimited digits, separator, check character (`12.345.678-5`).
    GroupedSeparated,
    /// Separator and check character present; delimiters left as supplied.
    SeparatedOnly,
    /// Separator and check character removed; delimiters left as supplied.
    GroupedOnly,
    /// Delimiters removed; separator and check character left as supplied.
    Bare,
    /// Delimiters removed and any trailing separator + check character removed.
    BareNoCheck,
}

/// Converts `text` to the requested canonical form.
pub fn convert(text: &str, form: CanonicalForm) -> Result<String, ValidationError> {
    match form {
        CanonicalForm::GroupedSeparated => to_grouped_separated(text),
        CanonicalForm::SeparatedOnly => to_separated_only(text),
        CanonicalForm::GroupedOnly => to_grouped_only(text),
        CanonicalForm::Bare => to_bare(text),
        CanonicalForm::BareNoCheck => to_bare_no_check(text),
    }
}

/// Inserts a delimiter every three digits counting from the right of the
/// leading digit run. Anything after the run is appended untouched, and no
/// leading empty group is ever produced (`1234` becomes `1.234`).
fn group_thousands(text: &str) -> String {
    let run = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, rest) = text.split_at(run);

    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(DELIMITER);
        }
        grouped.push(digit);
    }
    grouped.push_str(rest);
    grouped
}

/// Re-delimits the digit portion, keeping the separator and check character
/// as supplied.
///
/// Input without a separator is treated as a plain digit run and grouped
/// whole; nothing is split off as a check character.
pub fn to_grouped_separated(text: &str) -> Result<String, ValidationError> {
    validate_format(text)?;

    let cleaned = strip_delimiters(text);
    match cleaned.split_once(SEPARATOR) {
        Some((digits, check)) if !check.is_empty() => Ok(format!(
            "{}{}{}",
            group_thousands(digits),
            SEPARATOR,
            check
        )),
        Some((digits, _)) => Ok(group_thousands(digits)),
        None => Ok(group_thousands(&cleaned)),
    }
}

/// Attaches the separator before the trailing check character if absent.
///
/// Input that already carries a separator is returned unchanged, delimiters
/// included; this transform never strips them.
pub fn to_separated_only(text: &str) -> Result<String, ValidationError> {
    validate_format(text)?;

    if text.contains(SEPARATOR) {
        return Ok(text.to_string());
    }
    if strip_punctuation(text).len() < 2 {
        return Err(ValidationError::MissingCheckDigit {
            value: text.to_string(),
        });
    }

    let split = text.len() - text.chars().next_back().map_or(0, char::len_utf8);
    let (head, check) = text.split_at(split);
    Ok(format!("{}{}{}", head, SEPARATOR, check))
}

/// Drops the separator and the check character immediately following it.
/// Input without a separator is returned unchanged.
pub fn to_grouped_only(text: &str) -> Result<String, ValidationError> {
    validate_format(text)?;

    match text.split_once(SEPARATOR) {
        Some((head, tail)) => {
            let mut out = String::from(head);
            out.extend(tail.chars().skip(1));
            Ok(out)
        }
        None => Ok(text.to_string()),
    }
}

/// Removes every delimiter, leaving the separator and check character as
/// supplied.
pub fn to_bare(text: &str) -> Result<String, ValidationError> {
    validate_format(text)?;
    Ok(strip_delimiters(text))
}

/// Removes every delimiter, then a trailing separator + check character
/// suffix if one is present.
pub fn to_bare_no_check(text: &str) -> Result<String, ValidationError> {
    validate_format(text)?;

    let bare = strip_delimiters(text);
    let re = Regex::new(r"-[0-9kK]$").expect("invalid regex");
    Ok(re.replace(&bare, "").into_owned())
}

/// Fully normalizes `text` to the grouped + separated form, treating the
/// trailing character as the check character whether or not a separator is
/// present.
///
/// `"123456785"` becomes `"12.345.678-5"`; the supplied check character is
/// carried through without being recomputed.
pub fn normalize(text: &str) -> Result<String, ValidationError> {
    validate_format(text)?;

    let cleaned = strip_punctuation(text);
    if cleaned.len() < 2 {
        return Err(ValidationError::MissingCheckDigit {
            value: text.to_string(),
        });
    }

    let (digits, check) = cleaned.split_at(cleaned.len() - 1);
    Ok(format!("{}{}{}", group_thousands(digits), SEPARATOR, check))
}
