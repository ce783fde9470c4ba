use super::*;

#[test]
fn order_runs_name_email_password() {
    assert_eq!(FOCUS_ORDER, [Field::Name, Field::Email, Field::Password]);
}

#[test]
fn next_after_walks_the_chain() {
    assert_eq!(next_after(Field::Name), Some(Field::Email));
    assert_eq!(next_after(Field::Email), Some(Field::Password));
}

#[test]
fn last_field_has_no_successor() {
    assert_eq!(next_after(Field::Password), None);
}

#[test]
fn dom_ids_are_distinct_and_prefixed() {
    let ids = [
        dom_id(Field::Name),
        dom_id(Field::Email),
        dom_id(Field::Password),
    ];
    assert!(ids.iter().all(|id| id.starts_with("signup-")));
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
}
