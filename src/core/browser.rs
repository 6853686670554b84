//! Shared-with-me browser state and its reducer
//!
//! Two-level selection: an active user (parent) and one of that user's
//! datasets (child). Selecting a user always clears the dataset in the same
//! step, so a dataset id can never outlive the user it was chosen under.

use crate::core::filter::{DataCategory, FilterCriteria, filter_records};
use crate::core::records::{Catalog, Dataset, RecordId, SharedUser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    SearchChanged(String),
    CategoryChanged(DataCategory),
    ClearSearch,
    SelectUser(RecordId),
    SelectDataset(RecordId),
    BackToDatasets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    None,
    /// A dataset was opened; carries the owner's display name
    DatasetLoaded { owner: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SharedBrowser {
    pub criteria: FilterCriteria,
    pub active_user: Option<RecordId>,
    pub active_dataset: Option<RecordId>,
}

impl SharedBrowser {
    #[must_use]
    pub fn reduce(self, action: BrowserAction, catalog: &Catalog) -> (Self, BrowserOutcome) {
        match action {
            BrowserAction::SearchChanged(query) => (
                Self {
                    criteria: self.criteria.with_query(query),
                    ..self
                },
                BrowserOutcome::None,
            ),
            BrowserAction::CategoryChanged(category) => {
                tracing::debug!("Shared data category: {category}");
                (
                    Self {
                        criteria: self.criteria.with_category(category),
                        ..self
                    },
                    BrowserOutcome::None,
                )
            }
            BrowserAction::ClearSearch => (
                Self {
                    criteria: self.criteria.with_query(""),
                    ..self
                },
                BrowserOutcome::None,
            ),
            BrowserAction::SelectUser(id) => (
                Self {
                    active_user: Some(id),
                    active_dataset: None,
                    ..self
                },
                BrowserOutcome::None,
            ),
            BrowserAction::SelectDataset(id) => {
                let owner = self
                    .active_user(catalog)
                    .filter(|user| user.dataset(id).is_some())
                    .map(|user| user.name.clone());
                match owner {
                    Some(owner) => (
                        Self {
                            active_dataset: Some(id),
                            ..self
                        },
                        BrowserOutcome::DatasetLoaded { owner },
                    ),
                    None => {
                        tracing::debug!("Ignoring dataset {id} outside the active user");
                        (self, BrowserOutcome::None)
                    }
                }
            }
            BrowserAction::BackToDatasets => (
                Self {
                    active_dataset: None,
                    ..self
                },
                BrowserOutcome::None,
            ),
        }
    }

    /// Users matching the current criteria, in seed order
    pub fn filtered_users<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SharedUser> {
        filter_records(&catalog.shared_users, &self.criteria)
    }

    pub fn active_user<'a>(&self, catalog: &'a Catalog) -> Option<&'a SharedUser> {
        self.active_user.and_then(|id| catalog.shared_user(id))
    }

    /// The open dataset, resolved only within the active user
    pub fn active_dataset<'a>(&self, catalog: &'a Catalog) -> Option<&'a Dataset> {
        let dataset = self.active_dataset?;
        self.active_user(catalog)?.dataset(dataset)
    }
}
