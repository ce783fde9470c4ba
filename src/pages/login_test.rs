use super::*;

#[test]
fn validate_sign_in_input_trims_and_returns_email() {
    assert_eq!(
        validate_sign_in_input("  user@example.com  ", "hunter2"),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(
        validate_sign_in_input("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_sign_in_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_sign_in_input("user@example.com", "   "),
        Err("Enter both email and password.")
    );
}
