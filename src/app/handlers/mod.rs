//! Message handlers organized by domain
//!
//! Each handler takes the application state and one message payload, keeping
//! `State::update` a flat dispatch table.

pub mod session;
pub mod share;
pub mod shared;
pub mod ui_state;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use session::*;
pub(crate) use share::*;
pub(crate) use shared::*;
pub(crate) use ui_state::*;
