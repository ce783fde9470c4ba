//! Browser/environment helpers kept out of page and component logic.

pub mod alert;
pub mod focus;
