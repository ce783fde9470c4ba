//! Reusable UI component modules.

pub mod form_input;
pub mod submit_button;
