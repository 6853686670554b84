//! Shared test utilities for handler modules
//!
//! Provides common test helpers to avoid duplication across handler test suites.

use crate::app::{Screen, State};
use crate::config::AppConfig;
use crate::core::seed::DEMO_EMAIL;

/// Fresh state with default config, never touching disk
pub fn create_test_state() -> State {
    State::with_config(AppConfig::default()).0
}

/// State already past the login screen
pub fn create_signed_in_state(screen: Screen) -> State {
    let mut state = create_test_state();
    state.signed_in_as = Some(DEMO_EMAIL.to_string());
    state.screen = screen;
    state
}
