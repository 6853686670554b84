//! UI state management
//!
//! Handles UI state changes:
//! - Screen navigation and sign out
//! - Theme toggle
//! - Banner management

use crate::app::{Screen, State};

/// Moves to `screen`; screens behind sign-in are unreachable until signed in
pub(crate) fn handle_navigate(state: &mut State, screen: Screen) {
    if screen.requires_sign_in() && !state.is_signed_in() {
        tracing::debug!("Ignoring navigation to {screen} while signed out");
        return;
    }
    state.screen = screen;
}

pub(crate) fn handle_sign_out(state: &mut State) {
    if let Some(email) = state.signed_in_as.take() {
        tracing::info!("Signed out {email}");
    }
    state.reset_session();
    state.screen = Screen::Login;
}

/// Flips between light and dark for this session; the config file is never written
pub(crate) fn handle_toggle_theme(state: &mut State) {
    state.current_theme = state.current_theme.toggled();
    state.theme = state.current_theme.to_theme();
}

/// Handles pruning expired banners
pub(crate) fn handle_prune_banners(state: &mut State) {
    state.prune_expired_banners();
}

/// Handles dismissing a specific banner
pub(crate) fn handle_dismiss_banner(state: &mut State, index: usize) {
    if index < state.banners.len() {
        state.banners.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_signed_in_state, create_test_state};
    use crate::app::{BannerSeverity, Message};
    use crate::core::browser::BrowserAction;
    use crate::core::error::Notice;
    use crate::core::records::RecordId;
    use crate::core::share::ShareAction;
    use crate::theme::ThemeChoice;
    use std::time::{Duration, Instant};

    #[test]
    fn test_navigation_requires_sign_in() {
        let mut state = create_test_state();
        handle_navigate(&mut state, Screen::Share);
        assert_eq!(state.screen, Screen::Login);

        let mut state = create_signed_in_state(Screen::Upload);
        handle_navigate(&mut state, Screen::SharedWithMe);
        assert_eq!(state.screen, Screen::SharedWithMe);
    }

    #[test]
    fn test_sign_out_resets_session() {
        let mut state = create_signed_in_state(Screen::Share);
        let _ = state.update(Message::Share(ShareAction::ToggleContact(RecordId(1))));
        let _ = state.update(Message::Browser(BrowserAction::SelectUser(RecordId(1))));

        handle_sign_out(&mut state);
        assert!(!state.is_signed_in());
        assert_eq!(state.screen, Screen::Login);
        assert!(state.composer.selected_contacts.is_empty());
        assert_eq!(state.browser.active_user, None);
    }

    #[test]
    fn test_toggle_theme() {
        let mut state = create_test_state();
        assert_eq!(state.current_theme, ThemeChoice::Light);
        handle_toggle_theme(&mut state);
        assert_eq!(state.current_theme, ThemeChoice::Dark);
        assert!(!state.theme.is_light());
    }

    #[test]
    fn test_banner_cap_drops_oldest() {
        let mut state = create_test_state();
        for i in 0..5 {
            state.push_banner(Notice::new(format!("n{i}"), ""), BannerSeverity::Info, 5);
        }
        assert_eq!(state.banners.len(), 3);
        assert_eq!(state.banners.front().unwrap().title, "n2");
    }

    #[test]
    fn test_dismiss_banner_out_of_range_is_ignored() {
        let mut state = create_test_state();
        state.push_banner(Notice::new("a", ""), BannerSeverity::Info, 5);
        handle_dismiss_banner(&mut state, 4);
        assert_eq!(state.banners.len(), 1);
        handle_dismiss_banner(&mut state, 0);
        assert!(state.banners.is_empty());
    }

    #[test]
    fn test_prune_removes_only_expired() {
        let mut state = create_test_state();
        state.push_banner(Notice::new("stale", ""), BannerSeverity::Info, 5);
        state.push_banner(Notice::new("fresh", ""), BannerSeverity::Info, 5);
        state.banners[0].created_at = Instant::now()
            .checked_sub(Duration::from_secs(10))
            .unwrap_or_else(Instant::now);
        state.banners[0].duration = Duration::ZERO;

        handle_prune_banners(&mut state);
        assert_eq!(state.banners.len(), 1);
        assert_eq!(state.banners[0].title, "fresh");
    }
}
