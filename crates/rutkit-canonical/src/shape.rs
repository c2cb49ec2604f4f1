use regex::Regex;

// Pattern predicates are deliberately failure-free: malformed input is a
// plain `false`, never an error. The leading `[1-9]` class encodes the
// no-leading-zero rule.

fn matches(pattern: &str, text: &str) -> bool {
    Regex::new(pattern).expect("invalid regex").is_match(text)
}

/// Whether `text` is a delimited or undelimited RUT with separator and
/// check character, like `12.345.678-5` or `12345678-5`.
pub fn is_grouped_separated(text: &str) -> bool {
    matches(r"^[1-9][0-9]{0,2}(\.[0-9]{3}){1,2}-[0-9kK]$", text)
        || matches(r"^[1-9][0-9]{0,8}-[0-9kK]$", text)
}

/// Whether `text` is an undelimited RUT with separator and check character,
/// like `12345678-5`.
pub fn is_separated_only(text: &str) -> bool {
    matches(r"^[1-9][0-9]{0,8}-[0-9kK]$", text)
}

/// Whether `text` is a delimited digit run with no separator or check
/// character, like `12.345.678`.
pub fn is_grouped_only(text: &str) -> bool {
    matches(r"^[1-9][0-9]{0,2}(\.[0-9]{3}){1,2}$", text)
}

/// Whether `text` is a plain digit run with no punctuation at all, like
/// `12345678`.
pub fn is_bare_digits(text: &str) -> bool {
    matches(r"^[1-9][0-9]{0,8}$", text)
}
