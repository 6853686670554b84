//! DataWhisper - personal data sharing
//!
//! A desktop app for choosing visualizations of personal health data, sharing
//! them with contacts, and browsing data others have shared with you.
//!
//! # Architecture
//!
//! - [`core`] - Records, seed data, selection, filtering and the screen reducers
//! - [`validators`] - Form input validation
//! - [`config`] - Read-only configuration
//! - [`theme`] - Light and dark palettes
//! - [`utils`] - Utility functions (XDG directories, display helpers)
//!
//! All data is in memory. Nothing leaves the process; network latency is
//! simulated with timers.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod theme;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use crate::core::error::{Error, Result};
pub use crate::core::records::{Catalog, RecordId};
