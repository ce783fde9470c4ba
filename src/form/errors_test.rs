use super::*;

#[test]
fn new_map_is_empty() {
    let errors = FieldErrors::new();
    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
    assert_eq!(errors.message_for(Field::Name), None);
}

#[test]
fn from_violations_maps_each_field() {
    let errors = FieldErrors::from_violations(&[
        Violation {
            field: Field::Name,
            message: "Name is required.",
        },
        Violation {
            field: Field::Password,
            message: "Password must be at least 6 characters.",
        },
    ]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.message_for(Field::Name), Some("Name is required."));
    assert_eq!(errors.message_for(Field::Email), None);
    assert_eq!(
        errors.message_for(Field::Password),
        Some("Password must be at least 6 characters.")
    );
}

#[test]
fn later_violation_for_same_field_overwrites_earlier() {
    let errors = FieldErrors::from_violations(&[
        Violation {
            field: Field::Email,
            message: "Email is required.",
        },
        Violation {
            field: Field::Email,
            message: "Enter a valid email address.",
        },
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message_for(Field::Email),
        Some("Enter a valid email address.")
    );
}

#[test]
fn clear_is_idempotent() {
    let mut errors = FieldErrors::from_violations(&[Violation {
        field: Field::Name,
        message: "Name is required.",
    }]);
    errors.clear();
    assert!(errors.is_empty());
    errors.clear();
    assert!(errors.is_empty());
}
