//! Declarative sign-up schema with accumulating validation.
//!
//! DESIGN
//! ======
//! Rules are data, not control flow: `validate` walks the rule table in
//! order, keeps the first violation per field, and never stops early across
//! fields, so one pass reports every offending field at once.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Transient record collected by the registration form.
///
/// Built on submission, consumed synchronously by [`validate`], and dropped
/// once the attempt resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFormData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity of a registration field, used for error mapping and focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Stable lowercase identifier for logs and error maps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// A single violated rule: the field it belongs to and its display message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub message: &'static str,
}

enum Check {
    Required,
    Email,
    MinLen(usize),
}

struct Rule {
    field: Field,
    check: Check,
    message: &'static str,
}

// Password carries only a length constraint. An empty password therefore
// reports as too short, never as missing.
const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        check: Check::Required,
        message: "Name is required.",
    },
    Rule {
        field: Field::Email,
        check: Check::Required,
        message: "Email is required.",
    },
    Rule {
        field: Field::Email,
        check: Check::Email,
        message: "Enter a valid email address.",
    },
    Rule {
        field: Field::Password,
        check: Check::MinLen(PASSWORD_MIN_LEN),
        message: "Password must be at least 6 characters.",
    },
];

/// Check every rule and return the violations in rule-table order.
///
/// Accumulates across fields; within one field the first violated rule wins
/// and the remaining rules for that field are skipped, so each field maps to
/// at most one message.
#[must_use]
pub fn validate(data: &SignUpFormData) -> Vec<Violation> {
    let mut violations: Vec<Violation> = Vec::new();
    for rule in RULES {
        if violations.iter().any(|v| v.field == rule.field) {
            continue;
        }
        if !rule.check.passes(field_value(data, rule.field)) {
            violations.push(Violation {
                field: rule.field,
                message: rule.message,
            });
        }
    }
    violations
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::Email => is_valid_email(value),
            Self::MinLen(min) => value.chars().count() >= *min,
        }
    }
}

fn field_value(data: &SignUpFormData, field: Field) -> &str {
    match field {
        Field::Name => &data.name,
        Field::Email => &data.email,
        Field::Password => &data.password,
    }
}

/// Lightweight shape check: one `@`, non-empty local and domain parts, no
/// whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let parts = value.split('@').collect::<Vec<_>>();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
