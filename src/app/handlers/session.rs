//! Sign-in and data upload
//!
//! Handles the two forms that sit in front of sharing:
//! - Login against the demo account after a simulated round trip
//! - CSV file pick and upload
//! - Manual entry of one day of data

use crate::app::{BannerSeverity, Message, Screen, State};
use crate::core::error::{AuthError, Error, Notice};
use crate::core::session::{ManualEntry, SelectedFile, authenticate, simulate_latency};
use iced::Task;
use std::path::PathBuf;

pub(crate) fn handle_login_email_changed(state: &mut State, email: String) {
    state.login.email = email;
    if let Some(errors) = &mut state.login_errors {
        errors.email = None;
    }
}

pub(crate) fn handle_login_password_changed(state: &mut State, password: String) {
    state.login.password = password;
    if let Some(errors) = &mut state.login_errors {
        errors.password = None;
    }
}

/// Validates the form, then checks credentials after the configured delay
pub(crate) fn handle_login_submitted(state: &mut State) -> Task<Message> {
    if state.login.submitting {
        return Task::none();
    }
    if let Some(errors) = state.login.validate() {
        state.login_errors = Some(errors);
        return Task::none();
    }

    state.login_errors = None;
    state.login.submitting = true;
    let email = state.login.email.clone();
    let password = state.login.password.clone();
    let latency = state.config.login_latency();

    Task::perform(
        async move {
            simulate_latency(latency).await;
            authenticate(&email, &password)
        },
        Message::LoginCompleted,
    )
}

pub(crate) fn handle_login_completed(state: &mut State, result: Result<(), AuthError>) {
    state.login.submitting = false;
    match result {
        Ok(()) => {
            tracing::info!("Signed in as {}", state.login.email);
            state.signed_in_as = Some(state.login.email.clone());
            state.login.password.clear();
            state.screen = Screen::Upload;
            state.push_banner(
                Notice::new("Login successful", "Welcome back to DataWhisper!"),
                BannerSeverity::Success,
                5,
            );
        }
        Err(e) => {
            tracing::warn!("Sign-in refused for {}: {e}", state.login.email);
            state.push_banner(Error::from(e).notice(), BannerSeverity::Error, 8);
        }
    }
}

/// Opens the native file dialog filtered to CSV
pub(crate) fn handle_pick_file() -> Task<Message> {
    Task::perform(
        async {
            use rfd::AsyncFileDialog;
            AsyncFileDialog::new()
                .set_title("Select a CSV file")
                .add_filter("CSV", &["csv"])
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

/// Keeps the picked file only if it is a CSV; a cancelled dialog changes nothing
pub(crate) fn handle_file_picked(state: &mut State, path: Option<PathBuf>) {
    let Some(path) = path else {
        return;
    };
    match SelectedFile::from_path(&path) {
        Ok(file) => {
            tracing::debug!("Selected {}", file.path.display());
            state.upload.selected_file = Some(file);
        }
        Err(e) => {
            tracing::warn!("Rejected upload file: {e}");
            state.push_banner(Error::from(e).notice(), BannerSeverity::Error, 8);
        }
    }
}

pub(crate) fn handle_upload_file_submitted(state: &mut State) -> Task<Message> {
    if state.upload.uploading {
        return Task::none();
    }
    let name = match state.upload.file_for_submit() {
        Ok(file) => file.name.clone(),
        Err(e) => {
            state.push_banner(Error::from(e).notice(), BannerSeverity::Error, 8);
            return Task::none();
        }
    };

    state.upload.uploading = true;
    let latency = state.config.file_upload_latency();
    Task::perform(
        async move {
            simulate_latency(latency).await;
            name
        },
        Message::UploadFileCompleted,
    )
}

pub(crate) fn handle_upload_file_completed(state: &mut State, name: &str) {
    // Sign-out while the timer ran already reset the form
    if !state.is_signed_in() {
        tracing::debug!("Dropping upload of {name} finished after sign-out");
        return;
    }
    tracing::info!("Uploaded {name}");
    state.upload.uploading = false;
    state.upload.selected_file = None;
    state.screen = Screen::Share;
    state.push_banner(
        Notice::new("File uploaded", format!("Successfully uploaded {name}")),
        BannerSeverity::Success,
        5,
    );
}

pub(crate) fn handle_manual_date_changed(state: &mut State, date: String) {
    state.upload.manual.date = date;
}

pub(crate) fn handle_manual_steps_changed(state: &mut State, steps: String) {
    state.upload.manual.steps = steps;
}

pub(crate) fn handle_manual_sleep_changed(state: &mut State, sleep: String) {
    state.upload.manual.sleep = sleep;
}

pub(crate) fn handle_manual_mood_changed(state: &mut State, mood: String) {
    state.upload.manual.mood = mood;
}

/// Shows per-field errors, or submits the parsed entry after the configured delay
pub(crate) fn handle_manual_entry_submitted(state: &mut State) -> Task<Message> {
    if state.upload.uploading {
        return Task::none();
    }
    match state.upload.manual.validate() {
        Ok(entry) => {
            state.upload.manual_errors = None;
            state.upload.uploading = true;
            let latency = state.config.manual_entry_latency();
            Task::perform(
                async move {
                    simulate_latency(latency).await;
                    entry
                },
                Message::ManualEntryCompleted,
            )
        }
        Err(errors) => {
            state.upload.manual_errors = Some(errors);
            Task::none()
        }
    }
}

pub(crate) fn handle_manual_entry_completed(state: &mut State, entry: &ManualEntry) {
    if !state.is_signed_in() {
        tracing::debug!("Dropping manual entry for {} finished after sign-out", entry.date);
        return;
    }
    tracing::info!(
        "Recorded manual entry for {}: {} steps, {}h sleep, mood {}",
        entry.date,
        entry.steps,
        entry.sleep_hours,
        entry.mood
    );
    state.upload.uploading = false;
    state.upload.manual = crate::core::session::ManualEntryForm::default();
    state.screen = Screen::Share;
    state.push_banner(
        Notice::new(
            "Data submitted",
            "Your manual entry has been recorded successfully.",
        ),
        BannerSeverity::Success,
        5,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_signed_in_state, create_test_state};
    use crate::core::seed::{DEMO_EMAIL, DEMO_PASSWORD};

    #[test]
    fn test_invalid_login_form_shows_field_errors() {
        let mut state = create_test_state();
        handle_login_email_changed(&mut state, "not-an-email".to_string());
        handle_login_password_changed(&mut state, "short".to_string());
        let _task = handle_login_submitted(&mut state);

        let errors = state.login_errors.as_ref().unwrap();
        assert!(errors.email.is_some());
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert!(!state.login.submitting);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut state = create_test_state();
        let _task = handle_login_submitted(&mut state);
        assert!(state.login_errors.as_ref().unwrap().email.is_some());

        handle_login_email_changed(&mut state, "d".to_string());
        let errors = state.login_errors.as_ref().unwrap();
        assert!(errors.email.is_none());
        assert!(errors.password.is_some());
    }

    #[test]
    fn test_valid_login_form_starts_submitting() {
        let mut state = create_test_state();
        handle_login_email_changed(&mut state, DEMO_EMAIL.to_string());
        handle_login_password_changed(&mut state, DEMO_PASSWORD.to_string());
        let _task = handle_login_submitted(&mut state);
        assert!(state.login.submitting);
        assert!(state.login_errors.is_none());
    }

    #[test]
    fn test_login_success_navigates_to_upload() {
        let mut state = create_test_state();
        state.login.email = DEMO_EMAIL.to_string();
        state.login.submitting = true;
        handle_login_completed(&mut state, Ok(()));

        assert!(state.is_signed_in());
        assert_eq!(state.screen, Screen::Upload);
        assert!(!state.login.submitting);
        assert_eq!(state.banners.back().unwrap().severity, BannerSeverity::Success);
    }

    #[test]
    fn test_login_failure_stays_on_login() {
        let mut state = create_test_state();
        state.login.submitting = true;
        handle_login_completed(&mut state, Err(AuthError::InvalidCredentials));

        assert!(!state.is_signed_in());
        assert_eq!(state.screen, Screen::Login);
        let banner = state.banners.back().unwrap();
        assert_eq!(banner.title, "Login failed");
        assert_eq!(banner.severity, BannerSeverity::Error);
    }

    #[test]
    fn test_non_csv_file_is_rejected() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_file_picked(&mut state, Some(PathBuf::from("/tmp/notes.txt")));
        assert!(state.upload.selected_file.is_none());
        assert_eq!(state.banners.back().unwrap().title, "Invalid file type");
    }

    #[test]
    fn test_cancelled_dialog_keeps_previous_file() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_file_picked(&mut state, Some(PathBuf::from("/tmp/steps.csv")));
        handle_file_picked(&mut state, None);
        assert_eq!(state.upload.selected_file.as_ref().unwrap().name, "steps.csv");
        assert!(state.banners.is_empty());
    }

    #[test]
    fn test_upload_without_file_is_rejected() {
        let mut state = create_signed_in_state(Screen::Upload);
        let _task = handle_upload_file_submitted(&mut state);
        assert!(!state.upload.uploading);
        assert_eq!(state.banners.back().unwrap().title, "No file selected");
    }

    #[test]
    fn test_upload_flow_navigates_to_share() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_file_picked(&mut state, Some(PathBuf::from("/tmp/steps.csv")));
        let _task = handle_upload_file_submitted(&mut state);
        assert!(state.upload.uploading);

        handle_upload_file_completed(&mut state, "steps.csv");
        assert!(!state.upload.uploading);
        assert_eq!(state.screen, Screen::Share);
        assert_eq!(
            state.banners.back().unwrap().message,
            "Successfully uploaded steps.csv"
        );
    }

    #[test]
    fn test_manual_entry_errors_are_shown() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_manual_sleep_changed(&mut state, "30".to_string());
        let _task = handle_manual_entry_submitted(&mut state);

        let errors = state.upload.manual_errors.as_ref().unwrap();
        assert_eq!(errors.sleep.as_deref(), Some("Sleep hours cannot exceed 24"));
        assert_eq!(errors.mood.as_deref(), Some("Mood is required"));
        assert!(!state.upload.uploading);
    }

    #[test]
    fn test_manual_entry_flow_navigates_to_share() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_manual_date_changed(&mut state, "2025-04-10".to_string());
        handle_manual_steps_changed(&mut state, "9000".to_string());
        handle_manual_sleep_changed(&mut state, "7".to_string());
        handle_manual_mood_changed(&mut state, "Calm".to_string());
        let _task = handle_manual_entry_submitted(&mut state);
        assert!(state.upload.uploading);
        assert!(state.upload.manual_errors.is_none());

        let entry = state.upload.manual.validate().unwrap();
        handle_manual_entry_completed(&mut state, &entry);
        assert_eq!(state.screen, Screen::Share);
        assert!(state.upload.manual.mood.is_empty());
        assert_eq!(state.banners.back().unwrap().title, "Data submitted");
    }

    #[test]
    fn test_upload_finishing_after_sign_out_is_dropped() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_file_picked(&mut state, Some(PathBuf::from("/tmp/steps.csv")));
        let _task = handle_upload_file_submitted(&mut state);
        crate::app::handlers::handle_sign_out(&mut state);
        let banners_before = state.banners.len();

        handle_upload_file_completed(&mut state, "steps.csv");
        assert!(!state.is_signed_in());
        assert_eq!(state.screen, Screen::Login);
        assert!(!state.upload.uploading);
        assert_eq!(state.banners.len(), banners_before);
    }

    #[test]
    fn test_manual_entry_finishing_after_sign_out_is_dropped() {
        let mut state = create_signed_in_state(Screen::Upload);
        handle_manual_date_changed(&mut state, "2025-04-10".to_string());
        handle_manual_mood_changed(&mut state, "Calm".to_string());
        let entry = state.upload.manual.validate().unwrap();
        let _task = handle_manual_entry_submitted(&mut state);
        crate::app::handlers::handle_sign_out(&mut state);
        let banners_before = state.banners.len();

        handle_manual_entry_completed(&mut state, &entry);
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.banners.len(), banners_before);
    }
}
