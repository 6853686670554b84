//! Core sharing logic, free of any UI
//!
//! - [`records`]: Record types and the [`records::Catalog`] of seed collections
//! - [`seed`]: The fixed in-memory data set and demo constants
//! - [`selection`]: Toggle-able id sets
//! - [`filter`]: Search-and-category filtering
//! - [`share`]: Share composer reducer
//! - [`browser`]: Shared-with-me two-level browser reducer
//! - [`session`]: Login and upload form models
//! - [`error`]: Error types and their user-facing notices

pub mod browser;
pub mod error;
pub mod filter;
pub mod records;
pub mod seed;
pub mod selection;
pub mod session;
pub mod share;
