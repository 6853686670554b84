//! Integration tests for DataWhisper
//!
//! These tests drive the library's reducers and validators the way the GUI
//! does: a sequence of user actions folded over the seed catalog.
//!
//! ```bash
//! cargo test --test integration_tests
//! ```

#![allow(clippy::uninlined_format_args)]

use datawhisper::config::{AppConfig, load_config_from, parse_config};
use datawhisper::core::browser::{BrowserAction, BrowserOutcome, SharedBrowser};
use datawhisper::core::error::ShareError;
use datawhisper::core::filter::{DataCategory, FilterCriteria, filter_records};
use datawhisper::core::seed::{self, DEFAULT_SHARE_MESSAGE, DEMO_EMAIL, DEMO_PASSWORD};
use datawhisper::core::session::{LoginForm, ManualEntryForm, authenticate, simulate_latency};
use datawhisper::core::share::{ShareAction, ShareComposer, ShareOutcome};
use datawhisper::{Catalog, RecordId};
use std::time::Duration;

fn catalog() -> &'static Catalog {
    seed::catalog()
}

fn run_share(actions: Vec<ShareAction>) -> (ShareComposer, Vec<ShareOutcome>) {
    let mut composer = ShareComposer::new(catalog(), DEFAULT_SHARE_MESSAGE);
    let mut outcomes = Vec::new();
    for action in actions {
        let (next, outcome) = composer.reduce(action, catalog());
        composer = next;
        outcomes.push(outcome);
    }
    (composer, outcomes)
}

fn run_browser(actions: Vec<BrowserAction>) -> (SharedBrowser, Vec<BrowserOutcome>) {
    let mut browser = SharedBrowser::default();
    let mut outcomes = Vec::new();
    for action in actions {
        let (next, outcome) = browser.reduce(action, catalog());
        browser = next;
        outcomes.push(outcome);
    }
    (browser, outcomes)
}

fn names<R: datawhisper::core::records::Filterable>(records: &[&R]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_login_flow_with_demo_account() {
    let form = LoginForm {
        email: DEMO_EMAIL.to_string(),
        password: DEMO_PASSWORD.to_string(),
        submitting: false,
    };
    assert!(form.validate().is_none());

    let config = AppConfig::default();
    let started = tokio::time::Instant::now();
    simulate_latency(config.login_latency()).await;
    assert!(started.elapsed() >= Duration::from_millis(1000));

    assert!(authenticate(&form.email, &form.password).is_ok());
}

#[test]
fn test_login_rejects_wrong_password_after_validation() {
    let form = LoginForm {
        email: DEMO_EMAIL.to_string(),
        password: "wrongpassword".to_string(),
        submitting: false,
    };
    // Well-formed input passes validation but fails authentication
    assert!(form.validate().is_none());
    assert!(authenticate(&form.email, &form.password).is_err());
}

#[test]
fn test_login_validation_reports_each_field() {
    let form = LoginForm {
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        submitting: false,
    };
    let errors = form.validate().unwrap();
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
}

#[test]
fn test_manual_entry_collects_all_errors() {
    let form = ManualEntryForm {
        date: "2025-13-40".to_string(),
        steps: "-5".to_string(),
        sleep: "30".to_string(),
        mood: String::new(),
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.date.is_some());
    assert_eq!(errors.steps.as_deref(), Some("Steps must be a positive number"));
    assert_eq!(errors.sleep.as_deref(), Some("Sleep hours cannot exceed 24"));
    assert_eq!(errors.mood.as_deref(), Some("Mood is required"));
}

#[test]
fn test_manual_entry_accepts_valid_day() {
    let form = ManualEntryForm {
        date: "2025-04-20".to_string(),
        steps: "8500".to_string(),
        sleep: "7.5".to_string(),
        mood: "Happy".to_string(),
    };
    let entry = form.validate().unwrap();
    assert_eq!(entry.steps, 8500);
    assert!((entry.sleep_hours - 7.5).abs() < f64::EPSILON);
    assert_eq!(entry.mood, "Happy");
}

#[test]
fn test_share_requires_recipients() {
    // Visualizations 1 and 2 are preselected, no contacts are
    let (_, outcomes) = run_share(vec![ShareAction::Share]);
    assert_eq!(
        outcomes,
        vec![ShareOutcome::Rejected(ShareError::NoRecipients)]
    );
}

#[test]
fn test_share_requires_visualizations() {
    let (_, outcomes) = run_share(vec![
        ShareAction::ToggleVisualization(RecordId(1)),
        ShareAction::ToggleVisualization(RecordId(2)),
        ShareAction::ToggleContact(RecordId(1)),
        ShareAction::Share,
    ]);
    assert_eq!(
        outcomes.last(),
        Some(&ShareOutcome::Rejected(ShareError::NoVisualizations))
    );
}

#[test]
fn test_share_success_clears_recipients_only() {
    let (composer, outcomes) = run_share(vec![
        ShareAction::ToggleContact(RecordId(1)),
        ShareAction::ToggleContact(RecordId(3)),
        ShareAction::Share,
    ]);
    assert_eq!(
        outcomes.last(),
        Some(&ShareOutcome::Shared {
            visualizations: 2,
            recipients: 2
        })
    );
    assert!(composer.selected_contacts.is_empty());
    assert_eq!(composer.selected_visualizations.len(), 2);
}

#[test]
fn test_add_contact_flow() {
    let (composer, outcomes) = run_share(vec![
        ShareAction::EmailInputChanged("new.person@example.com".to_string()),
        ShareAction::AddEmail,
        ShareAction::EmailInputChanged("jane@example.com".to_string()),
        ShareAction::AddEmail,
        ShareAction::EmailInputChanged("nope".to_string()),
        ShareAction::AddEmail,
    ]);
    assert_eq!(
        outcomes[1],
        ShareOutcome::ContactAdded("new.person@example.com".to_string())
    );
    assert_eq!(
        outcomes[3],
        ShareOutcome::Rejected(ShareError::ContactExists("jane@example.com".to_string()))
    );
    assert_eq!(
        outcomes[5],
        ShareOutcome::Rejected(ShareError::InvalidEmail("nope".to_string()))
    );
    // Rejected input stays in the field for correction
    assert_eq!(composer.email_input, "nope");
}

#[test]
fn test_manage_access_flow() {
    let (composer, outcomes) = run_share(vec![
        ShareAction::RevokeAccess(RecordId(2)),
        ShareAction::ToggleShared(RecordId(3)),
        ShareAction::ToggleShared(RecordId(1)),
    ]);
    assert_eq!(outcomes[0], ShareOutcome::AccessRevoked("John Doe".to_string()));
    assert_eq!(
        outcomes[1],
        ShareOutcome::SharingChanged {
            title: "Mood Distribution".to_string(),
            shared: true
        }
    );
    assert_eq!(
        outcomes[2],
        ShareOutcome::SharingChanged {
            title: "Weekly Step Count".to_string(),
            shared: false
        }
    );
    assert!(composer.shared_visualizations.contains(RecordId(3)));
    assert!(!composer.shared_visualizations.contains(RecordId(1)));
    // Revoking is reported but the seed grants are untouched
    assert_eq!(catalog().access_grants.len(), 3);
}

#[test]
fn test_browse_and_open_dataset() {
    let (browser, outcomes) = run_browser(vec![
        BrowserAction::CategoryChanged(DataCategory::Sleep),
        BrowserAction::SelectUser(RecordId(2)),
        BrowserAction::SelectDataset(RecordId(5)),
    ]);
    assert_eq!(
        outcomes.last(),
        Some(&BrowserOutcome::DatasetLoaded {
            owner: "John Doe".to_string()
        })
    );
    let dataset = browser.active_dataset(catalog()).unwrap();
    assert_eq!(dataset.title, "Sleep vs Mood");
}

#[test]
fn test_switching_user_closes_dataset() {
    let (browser, _) = run_browser(vec![
        BrowserAction::SelectUser(RecordId(1)),
        BrowserAction::SelectDataset(RecordId(1)),
        BrowserAction::SelectUser(RecordId(3)),
    ]);
    assert_eq!(browser.active_user, Some(RecordId(3)));
    assert_eq!(browser.active_dataset, None);
}

#[test]
fn test_dataset_of_another_user_is_ignored() {
    let (browser, outcomes) = run_browser(vec![
        BrowserAction::SelectUser(RecordId(3)),
        BrowserAction::SelectDataset(RecordId(4)),
    ]);
    assert_eq!(outcomes.last(), Some(&BrowserOutcome::None));
    assert_eq!(browser.active_dataset, None);
}

#[test]
fn test_category_filters_shared_users() {
    let users = &catalog().shared_users;
    let steps = filter_records(users, &FilterCriteria::new("", DataCategory::Steps));
    assert_eq!(names(&steps), vec!["Jane Smith", "Sarah Wilson"]);

    let sleep = filter_records(users, &FilterCriteria::new("", DataCategory::Sleep));
    assert_eq!(names(&sleep), vec!["Jane Smith", "John Doe"]);

    let mood = filter_records(users, &FilterCriteria::new("", DataCategory::Mood));
    assert_eq!(mood.len(), 3);
}

#[test]
fn test_search_and_category_combine() {
    let (browser, _) = run_browser(vec![
        BrowserAction::SearchChanged("SARAH".to_string()),
        BrowserAction::CategoryChanged(DataCategory::Sleep),
    ]);
    assert!(browser.filtered_users(catalog()).is_empty());

    let (browser, _) = run_browser(vec![
        BrowserAction::SearchChanged("sarah".to_string()),
        BrowserAction::CategoryChanged(DataCategory::Steps),
        BrowserAction::ClearSearch,
    ]);
    // Clearing the search keeps the category
    assert_eq!(browser.criteria.category(), DataCategory::Steps);
    assert_eq!(browser.filtered_users(catalog()).len(), 2);
}

#[test]
fn test_contact_search_matches_email() {
    let criteria = FilterCriteria::new("michael@", DataCategory::All);
    let contacts = filter_records(&catalog().contacts, &criteria);
    assert_eq!(names(&contacts), vec!["Michael Brown"]);
}

#[tokio::test]
async fn test_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    tokio::fs::write(&path, r#"{"theme_choice": "Dark", "login_latency_ms": 10}"#)
        .await
        .unwrap();

    let config = load_config_from(&path).await;
    assert_eq!(config.login_latency(), Duration::from_millis(10));
    assert_eq!(config.file_upload_latency_ms, 1500);
    assert_eq!(config.default_share_message, DEFAULT_SHARE_MESSAGE);
}

#[tokio::test]
async fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json")).await;
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_config_is_an_error() {
    assert!(parse_config("{ not json").is_err());
}

#[test]
fn test_visualization_category_uses_its_own_title() {
    let visualizations = &catalog().visualizations;
    let titles = |category| {
        filter_records(visualizations, &FilterCriteria::new("", category))
            .iter()
            .map(|v| v.title.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(titles(DataCategory::Sleep), vec!["Sleep Patterns", "Sleep vs Mood"]);
    assert_eq!(titles(DataCategory::Mood), vec!["Mood Distribution", "Sleep vs Mood"]);
    assert_eq!(titles(DataCategory::Steps), vec!["Weekly Step Count"]);
}

#[test]
fn test_visualization_search_matches_title_only() {
    let criteria = FilterCriteria::new("patterns", DataCategory::All);
    let found = filter_records(&catalog().visualizations, &criteria);
    assert_eq!(names(&found), vec!["Sleep Patterns"]);

    // Visualizations carry no email, so an address matches nothing
    let criteria = FilterCriteria::new("@example.com", DataCategory::All);
    assert!(filter_records(&catalog().visualizations, &criteria).is_empty());
}

#[test]
fn test_access_grant_search() {
    let criteria = FilterCriteria::new("SARAH@", DataCategory::All);
    let grants = filter_records(&catalog().access_grants, &criteria);
    assert_eq!(names(&grants), vec!["Sarah Wilson"]);

    // Grants have no sub-items, so a concrete category excludes them all
    let criteria = FilterCriteria::new("", DataCategory::Sleep);
    assert!(filter_records(&catalog().access_grants, &criteria).is_empty());
}
