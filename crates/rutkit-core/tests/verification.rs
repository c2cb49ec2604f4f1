use rutkit_canonical::ValidationError;
use rutkit_core::{compute_check_digit, is_valid, CoreError, Rut};

fn make_separated(digits: &str) -> String {
    format!("{}-{}", digits, compute_check_digit(digits).unwrap())
}

#[test]
fn validity_symmetry_over_all_lengths() {
    for digits in [
        "1",
        "12",
        "123",
        "1234",
        "12345",
        "123456",
        "1234567",
        "12345678",
        "123456789",
    ] {
        let rut = make_separated(digits);
        assert!(is_valid(&rut).unwrap(), "{rut} should verify");

        let expected = compute_check_digit(digits).unwrap();
        for mutated in "0123456789K".chars() {
            if mutated == expected {
                continue;
            }
            let rut = format!("{}-{}", digits, mutated);
            assert!(!is_valid(&rut).unwrap(), "{rut} should not verify");
        }
    }
}

#[test]
fn scenario_vectors() {
    assert!(is_valid("20.347.878-K").unwrap());
    assert!(is_valid("20.347.878-k").unwrap());
    assert!(is_valid("20347878-K").unwrap());
    assert!(!is_valid("12.345.678-4").unwrap());
    assert!(is_valid("12.345.678-5").unwrap());
}

#[test]
fn trailing_character_counts_as_check_without_separator() {
    assert!(is_valid("123456785").unwrap());
    assert!(!is_valid("123456784").unwrap());
}

#[test]
fn malformed_input_fails_instead_of_returning_false() {
    assert!(matches!(
        is_valid("012.345.678-5"),
        Err(CoreError::Validation(ValidationError::LeadingZero { .. }))
    ));
    assert!(matches!(
        is_valid("12a45678-5"),
        Err(CoreError::Validation(ValidationError::BadShape { .. }))
    ));
    assert!(matches!(
        is_valid("1"),
        Err(CoreError::Validation(ValidationError::MissingCheckDigit { .. }))
    ));
    // More than one character after the separator.
    assert!(matches!(
        is_valid("12.345.678-45"),
        Err(CoreError::Validation(ValidationError::BadShape { .. }))
    ));
}

#[test]
fn boundary_lengths_follow_the_lenient_policy() {
    // Nine digits plus a check character verifies like any other length.
    let rut = make_separated("123456789");
    assert!(is_valid(&rut).unwrap());

    // Ten digits exceed the policy regardless of check character.
    assert!(is_valid("1234567890-1").is_err());
}

#[test]
fn rut_parse_accepts_verified_identifiers() {
    let rut = Rut::parse("12.345.678-5").unwrap();
    assert_eq!(rut.as_ref(), "12.345.678-5");
    assert_eq!(rut.digits(), "12345678");
    assert_eq!(rut.check_digit(), Some('5'));
}

#[test]
fn rut_parse_rejects_mismatched_check_digit() {
    assert!(matches!(
        Rut::parse("12.345.678-4"),
        Err(CoreError::CheckDigitMismatch { .. })
    ));
}

#[test]
fn rut_parse_propagates_validation_errors() {
    assert!(matches!(
        Rut::parse("012.345.678-5"),
        Err(CoreError::Validation(_))
    ));
}

#[test]
fn rut_uppercases_the_check_digit_accessor() {
    let rut = Rut::parse("20.347.878-k").unwrap();
    assert_eq!(rut.check_digit(), Some('K'));
}

#[test]
fn rut_displays_the_canonical_form() {
    assert_eq!(Rut::parse("123456785").unwrap().to_string(), "12.345.678-5");
    assert_eq!(
        Rut::parse("12345678-5").unwrap().to_string(),
        "12.345.678-5"
    );
}

#[test]
fn rut_serializes_transparently() {
    let rut = Rut::parse("12.345.678-5").unwrap();
    assert_eq!(serde_json::to_string(&rut).unwrap(), r#""12.345.678-5""#);

    let restored: Rut = serde_json::from_str(r#""12.345.678-5""#).unwrap();
    assert_eq!(restored, rut);
}
