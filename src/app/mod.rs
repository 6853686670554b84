pub mod handlers;
pub mod ui_components;
pub mod view;

use crate::config::AppConfig;
use crate::core::browser::{BrowserAction, SharedBrowser};
use crate::core::error::{AuthError, Notice};
use crate::core::records::Catalog;
use crate::core::session::{LoginErrors, LoginForm, ManualEntry, UploadForm, UploadTab};
use crate::core::share::{ShareAction, ShareComposer};
use iced::{Element, Task};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Banners beyond this count push out the oldest
const MAX_BANNERS: usize = 3;

pub struct State {
    pub config: AppConfig,
    pub current_theme: crate::theme::ThemeChoice,
    pub theme: crate::theme::AppTheme,
    pub catalog: &'static Catalog,
    pub screen: Screen,
    /// Email of the signed-in demo account
    pub signed_in_as: Option<String>,
    pub login: LoginForm,
    pub login_errors: Option<LoginErrors>,
    pub upload: UploadForm,
    pub composer: ShareComposer,
    pub share_tab: ShareTab,
    pub browser: SharedBrowser,
    pub banners: VecDeque<Banner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum Screen {
    #[default]
    Login,
    Upload,
    Share,
    #[strum(to_string = "Shared With Me")]
    SharedWithMe,
}

impl Screen {
    pub const fn requires_sign_in(self) -> bool {
        !matches!(self, Self::Login)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum ShareTab {
    #[default]
    #[strum(to_string = "Share Data")]
    ShareData,
    #[strum(to_string = "Manage Access")]
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub title: String,
    pub message: String,
    pub severity: BannerSeverity,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Banner {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Screen),
    SignOut,
    ToggleTheme,
    // Login
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginSubmitted,
    LoginCompleted(Result<(), AuthError>),
    // Upload
    UploadTabChanged(UploadTab),
    PickFileClicked,
    FilePicked(Option<PathBuf>),
    UploadFileSubmitted,
    UploadFileCompleted(String),
    ManualDateChanged(String),
    ManualStepsChanged(String),
    ManualSleepChanged(String),
    ManualMoodChanged(String),
    ManualEntrySubmitted,
    ManualEntryCompleted(ManualEntry),
    // Share
    ShareTabChanged(ShareTab),
    Share(ShareAction),
    // Shared with me
    Browser(BrowserAction),
    // Banners
    PruneBanners,
    DismissBanner(usize),
    EventOccurred(iced::Event),
}

impl State {
    pub fn with_config(config: AppConfig) -> (Self, Task<Message>) {
        let catalog = crate::core::seed::catalog();
        let current_theme = config.theme_choice;
        let composer = ShareComposer::new(catalog, config.default_share_message.clone());

        tracing::info!(
            "Starting DataWhisper with {} visualizations, {} contacts, {} shared users",
            catalog.visualizations.len(),
            catalog.contacts.len(),
            catalog.shared_users.len()
        );

        (
            Self {
                config,
                current_theme,
                theme: current_theme.to_theme(),
                catalog,
                screen: Screen::Login,
                signed_in_as: None,
                login: LoginForm::default(),
                login_errors: None,
                upload: UploadForm::default(),
                composer,
                share_tab: ShareTab::default(),
                browser: SharedBrowser::default(),
                banners: VecDeque::new(),
            },
            Task::none(),
        )
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in_as.is_some()
    }

    pub fn push_banner(&mut self, notice: Notice, severity: BannerSeverity, duration_secs: u64) {
        if self.banners.len() >= MAX_BANNERS {
            self.banners.pop_front();
        }
        self.banners.push_back(Banner {
            title: notice.title,
            message: notice.description,
            severity,
            created_at: Instant::now(),
            duration: Duration::from_secs(duration_secs),
        });
    }

    pub fn prune_expired_banners(&mut self) {
        let now = Instant::now();
        self.banners.retain(|b| !b.is_expired(now));
    }

    /// Puts every per-session form back to its initial state
    fn reset_session(&mut self) {
        self.login = LoginForm::default();
        self.login_errors = None;
        self.upload = UploadForm::default();
        self.composer = ShareComposer::new(self.catalog, self.config.default_share_message.clone());
        self.share_tab = ShareTab::default();
        self.browser = SharedBrowser::default();
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => handlers::handle_navigate(self, screen),
            Message::SignOut => handlers::handle_sign_out(self),
            Message::ToggleTheme => handlers::handle_toggle_theme(self),
            Message::LoginEmailChanged(email) => handlers::handle_login_email_changed(self, email),
            Message::LoginPasswordChanged(password) => {
                handlers::handle_login_password_changed(self, password);
            }
            Message::LoginSubmitted => return handlers::handle_login_submitted(self),
            Message::LoginCompleted(result) => handlers::handle_login_completed(self, result),
            Message::UploadTabChanged(tab) => self.upload.tab = tab,
            Message::PickFileClicked => return handlers::handle_pick_file(),
            Message::FilePicked(path) => handlers::handle_file_picked(self, path),
            Message::UploadFileSubmitted => return handlers::handle_upload_file_submitted(self),
            Message::UploadFileCompleted(name) => handlers::handle_upload_file_completed(self, &name),
            Message::ManualDateChanged(date) => handlers::handle_manual_date_changed(self, date),
            Message::ManualStepsChanged(steps) => {
                handlers::handle_manual_steps_changed(self, steps);
            }
            Message::ManualSleepChanged(sleep) => {
                handlers::handle_manual_sleep_changed(self, sleep);
            }
            Message::ManualMoodChanged(mood) => handlers::handle_manual_mood_changed(self, mood),
            Message::ManualEntrySubmitted => return handlers::handle_manual_entry_submitted(self),
            Message::ManualEntryCompleted(entry) => {
                handlers::handle_manual_entry_completed(self, &entry);
            }
            Message::ShareTabChanged(tab) => self.share_tab = tab,
            Message::Share(action) => handlers::handle_share_action(self, action),
            Message::Browser(action) => handlers::handle_browser_action(self, action),
            Message::PruneBanners => handlers::handle_prune_banners(self),
            Message::DismissBanner(index) => handlers::handle_dismiss_banner(self, index),
            Message::EventOccurred(event) => return self.handle_event(&event),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn handle_event(&mut self, event: &iced::Event) -> Task<Message> {
        if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event
            && let iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) = key.as_ref()
            && self.screen == Screen::SharedWithMe
            && !self.browser.criteria.query().is_empty()
        {
            return Task::done(Message::Browser(BrowserAction::ClearSearch));
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::Subscription::batch(vec![
            iced::event::listen().map(Message::EventOccurred),
            if self.banners.is_empty() {
                iced::Subscription::none()
            } else {
                iced::time::every(Duration::from_millis(500)).map(|_| Message::PruneBanners)
            },
        ])
    }
}
