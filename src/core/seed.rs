//! Static seed data for every screen
//!
//! The application has no backend; these collections stand in for what a
//! server would return. They are built once and shared by reference.

use crate::core::records::{
    AccessGrant, AccessStatus, Catalog, ChartKind, Contact, Dataset, RecordId, SharedUser,
    Visualization,
};
use std::sync::LazyLock;

/// Demo account accepted by the login screen
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Visualizations pre-selected when the share composer opens
pub const DEFAULT_SELECTED_VISUALIZATIONS: [RecordId; 2] = [RecordId(1), RecordId(2)];

pub const DEFAULT_SHARE_MESSAGE: &str =
    "I'd like to share my data insights with you. Check out these visualizations.";

static CATALOG: LazyLock<Catalog> = LazyLock::new(build_catalog);

/// Returns the process-wide seed catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

fn visualization(
    id: u32,
    title: &str,
    kind: ChartKind,
    date_created: &str,
    shared: bool,
) -> Visualization {
    Visualization {
        id: RecordId(id),
        title: title.to_string(),
        kind,
        date_created: date_created.to_string(),
        shared,
    }
}

fn contact(id: u32, name: &str, email: &str) -> Contact {
    Contact {
        id: RecordId(id),
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn grant(id: u32, name: &str, email: &str, date_shared: &str, status: AccessStatus) -> AccessGrant {
    AccessGrant {
        id: RecordId(id),
        name: name.to_string(),
        email: email.to_string(),
        date_shared: date_shared.to_string(),
        status,
    }
}

fn dataset(id: u32, title: &str, kind: ChartKind) -> Dataset {
    Dataset {
        id: RecordId(id),
        title: title.to_string(),
        kind,
    }
}

fn build_catalog() -> Catalog {
    Catalog {
        visualizations: vec![
            visualization(1, "Weekly Step Count", ChartKind::Bar, "2025-04-05", true),
            visualization(2, "Sleep Patterns", ChartKind::Line, "2025-04-08", true),
            visualization(3, "Mood Distribution", ChartKind::Pie, "2025-04-12", false),
            visualization(4, "Sleep vs Mood", ChartKind::Line, "2025-04-15", true),
        ],
        contacts: vec![
            contact(1, "Jane Smith", "jane@example.com"),
            contact(2, "John Doe", "john@example.com"),
            contact(3, "Sarah Wilson", "sarah@example.com"),
            contact(4, "Michael Brown", "michael@example.com"),
            contact(5, "Emily Jones", "emily@example.com"),
        ],
        access_grants: vec![
            grant(1, "Jane Smith", "jane@example.com", "2025-04-10", AccessStatus::Viewed),
            grant(2, "John Doe", "john@example.com", "2025-04-12", AccessStatus::Pending),
            grant(3, "Sarah Wilson", "sarah@example.com", "2025-04-15", AccessStatus::Accepted),
        ],
        shared_users: vec![
            SharedUser {
                id: RecordId(1),
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                shared_date: "2025-04-10".to_string(),
                datasets: vec![
                    dataset(1, "Weekly Step Count", ChartKind::Bar),
                    dataset(2, "Sleep Patterns", ChartKind::Line),
                    dataset(3, "Mood Distribution", ChartKind::Pie),
                ],
            },
            SharedUser {
                id: RecordId(2),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                shared_date: "2025-04-12".to_string(),
                datasets: vec![
                    dataset(4, "Sleep Patterns", ChartKind::Line),
                    dataset(5, "Sleep vs Mood", ChartKind::Line),
                ],
            },
            SharedUser {
                id: RecordId(3),
                name: "Sarah Wilson".to_string(),
                email: "sarah@example.com".to_string(),
                shared_date: "2025-04-15".to_string(),
                datasets: vec![
                    dataset(6, "Weekly Step Count", ChartKind::Bar),
                    dataset(7, "Mood Distribution", ChartKind::Pie),
                ],
            },
        ],
    }
}
