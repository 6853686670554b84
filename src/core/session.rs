//! Login and upload form models
//!
//! Nothing here talks to a network: submissions wait a fixed delay and then
//! succeed (upload) or compare against the demo account (login). The delay is
//! driven by the caller; this module only holds form state, validation and
//! the final check.

use crate::core::error::{AuthError, UploadError};
use crate::core::seed::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::validators;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Waits `latency` to stand in for a network round trip
pub async fn simulate_latency(latency: Duration) {
    tokio::time::sleep(latency).await;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

impl LoginForm {
    /// Field-level checks run before the simulated request
    pub fn validate(&self) -> Option<LoginErrors> {
        let errors = LoginErrors {
            email: validators::validate_email(&self.email).err(),
            password: validators::validate_password(&self.password).err(),
        };
        if errors.is_empty() { None } else { Some(errors) }
    }
}

/// Checks credentials against the demo account
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] for anything but the demo account.
pub fn authenticate(email: &str, password: &str) -> Result<(), AuthError> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Which half of the upload screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadTab {
    #[default]
    File,
    Manual,
}

/// CSV file chosen for upload; only the name is ever used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    /// Accepts `path` only if its name ends in `.csv`
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NotCsv`] for any other file name.
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        validators::validate_csv_name(&name).map_err(|_| UploadError::NotCsv(name.clone()))?;
        Ok(Self {
            path: path.to_path_buf(),
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualEntryErrors {
    pub date: Option<String>,
    pub steps: Option<String>,
    pub sleep: Option<String>,
    pub mood: Option<String>,
}

impl ManualEntryErrors {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.steps.is_none() && self.sleep.is_none() && self.mood.is_none()
    }
}

/// One validated day of manual data
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntry {
    pub date: chrono::NaiveDate,
    pub steps: u32,
    pub sleep_hours: f64,
    pub mood: String,
}

/// Raw text of the manual entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntryForm {
    pub date: String,
    pub steps: String,
    pub sleep: String,
    pub mood: String,
}

impl Default for ManualEntryForm {
    fn default() -> Self {
        Self {
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            steps: "0".to_string(),
            sleep: "0".to_string(),
            mood: String::new(),
        }
    }
}

impl ManualEntryForm {
    /// Parses every field, collecting one message per invalid field
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<ManualEntry, ManualEntryErrors> {
        let date = validators::validate_date(&self.date);
        let steps = validators::validate_steps(&self.steps);
        let sleep = validators::validate_sleep_hours(&self.sleep);
        let mood = validators::validate_mood(&self.mood);

        match (date, steps, sleep, mood) {
            (Ok(date), Ok(steps), Ok(sleep_hours), Ok(mood)) => Ok(ManualEntry {
                date,
                steps,
                sleep_hours,
                mood,
            }),
            (date, steps, sleep, mood) => Err(ManualEntryErrors {
                date: date.err(),
                steps: steps.err(),
                sleep: sleep.err(),
                mood: mood.err(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub tab: UploadTab,
    pub selected_file: Option<SelectedFile>,
    pub manual: ManualEntryForm,
    pub manual_errors: Option<ManualEntryErrors>,
    pub uploading: bool,
}

impl UploadForm {
    /// The file that a submit would upload
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NoFileSelected`] when no CSV has been picked.
    pub fn file_for_submit(&self) -> Result<&SelectedFile, UploadError> {
        self.selected_file.as_ref().ok_or(UploadError::NoFileSelected)
    }
}
