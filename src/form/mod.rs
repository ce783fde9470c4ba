//! Framework-independent form core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `schema` validates a submitted record, `errors` maps violations to
//! per-field messages, `focus` orders the fields for keyboard advance, and
//! `controller` turns one attempt into an accept-or-reject decision. Nothing
//! in here touches the DOM or the rendering framework.

pub mod controller;
pub mod errors;
pub mod focus;
pub mod schema;
