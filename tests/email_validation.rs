use stay_updated::domain::{
    validate, SubscriberEmail, ValidationError, ValidationResult, VALIDATION_MESSAGE,
};

#[test]
fn accepts_common_addresses() {
    for input in [
        "user@example.com",
        "test@example.com",
        "first.last@mail.example.co.uk",
        "a+tag@sub-domain.example.io",
        "o'brien@example.ie",
        "x_y-z@e.xyz",
    ] {
        assert_eq!(validate(input), ValidationResult::Valid, "{input} should be valid");
    }
}

#[test]
fn rejects_empty_string() {
    assert_eq!(
        validate(""),
        ValidationResult::Invalid(ValidationError::Empty)
    );
}

#[test]
fn rejects_domain_without_dot() {
    assert_eq!(
        validate("invalid-email@email"),
        ValidationResult::Invalid(ValidationError::Malformed)
    );
}

#[test]
fn rejects_malformed_addresses() {
    for input in [
        "plainaddress",
        "@example.com",
        "user@",
        "user@@example.com",
        "user@exa@mple.com",
        "user@.com",
        "user@example.",
        "user@example.c",
        ".user@example.com",
        "user.@example.com",
        "us..er@example.com",
        "user@example..com",
        "user name@example.com",
        "user@exam_ple.com",
        "user@example.c0m",
    ] {
        assert!(!validate(input).is_valid(), "{input} should be invalid");
    }
}

#[test]
fn surrounding_whitespace_is_not_trimmed() {
    assert!(!validate(" user@example.com").is_valid());
    assert!(!validate("user@example.com ").is_valid());
    assert!(!validate("user@example.com\n").is_valid());
}

#[test]
fn every_rejection_carries_the_same_message() {
    for input in ["", "nope", "invalid-email@email"] {
        let err = validate(input).error().expect("should be invalid");
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
        assert_eq!(err.user_message(), "Valid email required");
    }
}

#[test]
fn subscriber_email_keeps_input_verbatim() {
    let email = SubscriberEmail::parse("User@Example.com".to_string()).unwrap();
    assert_eq!(email.as_ref(), "User@Example.com");
    assert_eq!(email.to_string(), "User@Example.com");
}

#[test]
fn subscriber_email_rejects_invalid_input() {
    assert_eq!(
        SubscriberEmail::parse("invalid-email@email".to_string()),
        Err(ValidationError::Malformed)
    );
}
