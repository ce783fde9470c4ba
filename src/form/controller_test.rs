use super::*;

use crate::form::schema::Field;

fn valid_data() -> SignUpFormData {
    SignUpFormData {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
    }
}

#[test]
fn evaluate_accepts_valid_record_and_mirrors_fields() {
    let payload = evaluate(&valid_data()).unwrap();
    assert_eq!(payload.name, "Ana");
    assert_eq!(payload.email, "ana@example.com");
    assert_eq!(payload.password, "secret1");
}

#[test]
fn evaluate_rejects_with_full_mapping() {
    let data = SignUpFormData {
        name: String::new(),
        email: "bad".to_owned(),
        password: "12".to_owned(),
    };
    let errors = evaluate(&data).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.message_for(Field::Name).is_some());
    assert!(errors.message_for(Field::Email).is_some());
    assert!(errors.message_for(Field::Password).is_some());
}

#[test]
fn evaluate_rejection_names_only_offending_fields() {
    let data = SignUpFormData {
        email: "abc".to_owned(),
        ..valid_data()
    };
    let errors = evaluate(&data).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for(Field::Name), None);
    assert_eq!(errors.message_for(Field::Password), None);
}

#[test]
fn submit_error_display_is_user_loggable() {
    let request = SubmitError::Request("connection refused".to_owned());
    assert_eq!(request.to_string(), "account request failed: connection refused");

    let status = SubmitError::Status(500);
    assert_eq!(status.to_string(), "account request rejected: status 500");
}
