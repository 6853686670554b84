//! Share composer state and its reducer
//!
//! The composer owns three selections: visualizations to share, contacts to
//! share with, and the per-visualization "shared" switch of the Manage tab.
//! Every user event becomes a [`ShareAction`] fed to [`ShareComposer::reduce`],
//! which returns the next state together with a [`ShareOutcome`] for the
//! presentation layer to report.

use crate::core::error::ShareError;
use crate::core::records::{Catalog, RecordId};
use crate::core::seed::{DEFAULT_SELECTED_VISUALIZATIONS, DEFAULT_SHARE_MESSAGE};
use crate::core::selection::SelectionSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    ToggleVisualization(RecordId),
    ToggleContact(RecordId),
    EmailInputChanged(String),
    MessageChanged(String),
    AddEmail,
    Share,
    RevokeAccess(RecordId),
    ToggleShared(RecordId),
}

/// What a reducer step produced besides the new state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    None,
    ContactAdded(String),
    Shared {
        visualizations: usize,
        recipients: usize,
    },
    AccessRevoked(String),
    SharingChanged {
        title: String,
        shared: bool,
    },
    Rejected(ShareError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareComposer {
    pub selected_visualizations: SelectionSet,
    pub selected_contacts: SelectionSet,
    /// Visualizations whose sharing switch is on
    pub shared_visualizations: SelectionSet,
    pub email_input: String,
    pub message: String,
}

impl Default for ShareComposer {
    fn default() -> Self {
        Self {
            selected_visualizations: SelectionSet::with_preset(DEFAULT_SELECTED_VISUALIZATIONS),
            selected_contacts: SelectionSet::new(),
            shared_visualizations: SelectionSet::new(),
            email_input: String::new(),
            message: DEFAULT_SHARE_MESSAGE.to_string(),
        }
    }
}

impl ShareComposer {
    /// Fresh composer for `catalog`, with the sharing switches taken from the seed flags
    pub fn new(catalog: &Catalog, message: impl Into<String>) -> Self {
        Self {
            shared_visualizations: catalog
                .visualizations
                .iter()
                .filter(|v| v.shared)
                .map(|v| v.id)
                .collect(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// The Share Now button is enabled only with something to share and someone to share with
    pub fn can_share(&self) -> bool {
        !self.selected_visualizations.is_empty() && !self.selected_contacts.is_empty()
    }

    #[must_use]
    pub fn reduce(self, action: ShareAction, catalog: &Catalog) -> (Self, ShareOutcome) {
        match action {
            ShareAction::ToggleVisualization(id) => {
                let next = Self {
                    selected_visualizations: self.selected_visualizations.toggle(id),
                    ..self
                };
                tracing::debug!(
                    "Visualization {id} selected: {}",
                    next.selected_visualizations.contains(id)
                );
                (next, ShareOutcome::None)
            }
            ShareAction::ToggleContact(id) => {
                let next = Self {
                    selected_contacts: self.selected_contacts.toggle(id),
                    ..self
                };
                tracing::debug!("Contact {id} selected: {}", next.selected_contacts.contains(id));
                (next, ShareOutcome::None)
            }
            ShareAction::EmailInputChanged(email_input) => (
                Self {
                    email_input,
                    ..self
                },
                ShareOutcome::None,
            ),
            ShareAction::MessageChanged(message) => (Self { message, ..self }, ShareOutcome::None),
            ShareAction::AddEmail => self.add_email(catalog),
            ShareAction::Share => self.share(),
            ShareAction::RevokeAccess(id) => {
                let outcome = catalog
                    .access_grant(id)
                    .map_or(ShareOutcome::None, |g| ShareOutcome::AccessRevoked(g.name.clone()));
                (self, outcome)
            }
            ShareAction::ToggleShared(id) => {
                let Some(viz) = catalog.visualization(id) else {
                    return (self, ShareOutcome::None);
                };
                let shared_visualizations = self.shared_visualizations.toggle(id);
                let outcome = ShareOutcome::SharingChanged {
                    title: viz.title.clone(),
                    shared: shared_visualizations.contains(id),
                };
                (
                    Self {
                        shared_visualizations,
                        ..self
                    },
                    outcome,
                )
            }
        }
    }

    fn add_email(self, catalog: &Catalog) -> (Self, ShareOutcome) {
        let email = self.email_input.clone();
        if let Err(e) = crate::validators::validate_contact_email(&email) {
            tracing::debug!("Rejected contact email: {e}");
            return (self, ShareOutcome::Rejected(ShareError::InvalidEmail(email)));
        }
        if catalog.has_contact_email(&email) {
            return (self, ShareOutcome::Rejected(ShareError::ContactExists(email)));
        }
        (
            Self {
                email_input: String::new(),
                ..self
            },
            ShareOutcome::ContactAdded(email),
        )
    }

    fn share(self) -> (Self, ShareOutcome) {
        if self.selected_visualizations.is_empty() {
            return (self, ShareOutcome::Rejected(ShareError::NoVisualizations));
        }
        if self.selected_contacts.is_empty() {
            return (self, ShareOutcome::Rejected(ShareError::NoRecipients));
        }
        let outcome = ShareOutcome::Shared {
            visualizations: self.selected_visualizations.len(),
            recipients: self.selected_contacts.len(),
        };
        (
            Self {
                selected_contacts: self.selected_contacts.clear(),
                ..self
            },
            outcome,
        )
    }
}
