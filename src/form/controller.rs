//! Submit decision core for the registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand a collected record to [`evaluate`] and receive either a payload
//! for the injected submission handler or a fresh field error mapping. The
//! networking/navigation side lives behind that handler, so this module stays
//! framework-free and the two-branch contract is directly unit-testable.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use thiserror::Error;

use crate::form::errors::FieldErrors;
use crate::form::schema::{SignUpFormData, validate};
use crate::net::types::NewUser;

/// Failures past validation. Anything here surfaces as one generic alert,
/// never as per-field messages.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Transport or serialization problem while reaching the account service.
    #[error("account request failed: {0}")]
    Request(String),
    /// The account service answered with a non-success status.
    #[error("account request rejected: status {0}")]
    Status(u16),
}

/// Validate one submitted record.
///
/// Returns the payload for the submission handler when every rule passes.
///
/// # Errors
///
/// `FieldErrors` carries one message per offending field, accumulated in a
/// single pass.
pub fn evaluate(data: &SignUpFormData) -> Result<NewUser, FieldErrors> {
    let violations = validate(data);
    if violations.is_empty() {
        Ok(NewUser {
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
        })
    } else {
        Err(FieldErrors::from_violations(&violations))
    }
}
