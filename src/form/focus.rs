//! Focus-advance order for the registration fields.
//!
//! DESIGN
//! ======
//! The chain is plain data: pages consume one identifier at a time instead of
//! holding framework references to sibling inputs. The DOM driver that acts
//! on an identifier lives in `util::focus`.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use crate::form::schema::Field;

/// Submit-editing order: finishing one field moves focus to the next; the
/// last entry submits the form.
pub const FOCUS_ORDER: [Field; 3] = [Field::Name, Field::Email, Field::Password];

/// The field focused after `field`, or `None` when `field` is last.
#[must_use]
pub fn next_after(field: Field) -> Option<Field> {
    let position = FOCUS_ORDER.iter().position(|f| *f == field)?;
    FOCUS_ORDER.get(position + 1).copied()
}

/// DOM id of a field's input element.
#[must_use]
pub fn dom_id(field: Field) -> &'static str {
    match field {
        Field::Name => "signup-name",
        Field::Email => "signup-email",
        Field::Password => "signup-password",
    }
}
