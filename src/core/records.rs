//! Record types shared by the sharing composer and the shared-with-me browser
//!
//! Every record here is seed data: it is created once at startup and never
//! mutated afterwards. Screens keep only identifiers in their own state and
//! resolve them against a [`Catalog`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter};

/// Integer identifier, unique within one record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecordId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Chart type attached to visualizations and datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ChartKind {
    #[strum(to_string = "Bar Chart")]
    Bar,
    #[strum(to_string = "Line Chart")]
    Line,
    #[strum(to_string = "Pie Chart")]
    Pie,
}

impl ChartKind {
    /// Single-glyph marker used in list rows
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Bar => "▥",
            Self::Line => "⟋",
            Self::Pie => "◔",
        }
    }
}

/// A chart the signed-in user owns and can share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: RecordId,
    pub title: String,
    pub kind: ChartKind,
    pub date_created: String,
    /// Whether the chart was shared when the session started
    pub shared: bool,
}

/// Someone the user can share visualizations with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Progress of a share as seen from the owner's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum AccessStatus {
    Viewed,
    Pending,
    Accepted,
}

/// A person who currently has access to the user's shared data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub date_shared: String,
    pub status: AccessStatus,
}

/// One dataset another user shared with the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: RecordId,
    pub title: String,
    pub kind: ChartKind,
}

/// Another user who shares datasets with the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub shared_date: String,
    pub datasets: Vec<Dataset>,
}

impl SharedUser {
    /// Looks up one of this user's datasets
    pub fn dataset(&self, id: RecordId) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Avatar fallback: first letter of every word in the name
    pub fn initials(&self) -> String {
        crate::utils::initials(&self.name)
    }
}

/// Text and category view of a record used by [`crate::core::filter`]
pub trait Filterable {
    /// Display name matched by the search query
    fn name(&self) -> &str;

    /// Secondary identifying field matched by the search query
    fn email(&self) -> Option<&str> {
        None
    }

    /// Titles of associated sub-items matched by the category filter
    fn sub_item_titles(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Filterable for Contact {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl Filterable for AccessGrant {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl Filterable for SharedUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn sub_item_titles(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.title.as_str()).collect()
    }
}

impl Filterable for Visualization {
    fn name(&self) -> &str {
        &self.title
    }

    // A visualization is its own sub-item for category matching
    fn sub_item_titles(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

/// All seed collections the screens operate on
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub visualizations: Vec<Visualization>,
    pub contacts: Vec<Contact>,
    pub access_grants: Vec<AccessGrant>,
    pub shared_users: Vec<SharedUser>,
}

impl Catalog {
    /// The static seed catalog every screen starts from
    pub fn seed() -> &'static Self {
        crate::core::seed::catalog()
    }

    pub fn visualization(&self, id: RecordId) -> Option<&Visualization> {
        self.visualizations.iter().find(|v| v.id == id)
    }

    pub fn contact(&self, id: RecordId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn access_grant(&self, id: RecordId) -> Option<&AccessGrant> {
        self.access_grants.iter().find(|g| g.id == id)
    }

    pub fn shared_user(&self, id: RecordId) -> Option<&SharedUser> {
        self.shared_users.iter().find(|u| u.id == id)
    }

    /// Exact, case-sensitive email match against the contact list
    pub fn has_contact_email(&self, email: &str) -> bool {
        self.contacts.iter().any(|c| c.email == email)
    }
}
