//! Networking modules for the account API.
//!
//! `api` performs the HTTP calls and `types` defines the request schema.

pub mod api;
pub mod types;
