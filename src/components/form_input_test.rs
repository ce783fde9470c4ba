use super::*;

#[test]
fn container_class_flags_error_state() {
    assert_eq!(input_container_class(false), "form-input");
    assert_eq!(input_container_class(true), "form-input form-input--error");
}

#[test]
fn icon_class_carries_the_icon_modifier() {
    assert_eq!(
        icon_class_for("user"),
        "form-input__icon form-input__icon--user"
    );
}
