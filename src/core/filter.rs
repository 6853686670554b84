//! Search-and-category filtering over record collections
//!
//! Filtering is stable: the result keeps the input order and never sorts.
//! Both predicates must hold for a record to appear:
//!
//! - **Text**: the query is a case-insensitive substring of the record's name
//!   or email. An empty query matches everything.
//! - **Category**: [`DataCategory::All`] matches everything; any other
//!   category matches when one of the record's sub-item titles contains the
//!   category keyword, case-insensitively.

use crate::core::records::Filterable;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Category drop-down of the shared-with-me screen
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum DataCategory {
    #[default]
    #[strum(to_string = "All Data", serialize = "all")]
    All,
    #[strum(to_string = "Steps", serialize = "steps")]
    Steps,
    #[strum(to_string = "Sleep", serialize = "sleep")]
    Sleep,
    #[strum(to_string = "Mood", serialize = "mood")]
    Mood,
}

impl DataCategory {
    /// Lowercase keyword searched for in sub-item titles, `None` for the wildcard
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Steps => Some("step"),
            Self::Sleep => Some("sleep"),
            Self::Mood => Some("mood"),
        }
    }
}

/// Current search text and category
///
/// Criteria are values: every edit builds a new one through [`Self::with_query`]
/// or [`Self::with_category`] instead of mutating fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    query: String,
    query_lowercase: String,
    category: DataCategory,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: DataCategory) -> Self {
        let query = query.into();
        Self {
            query_lowercase: query.to_lowercase(),
            query,
            category,
        }
    }

    /// Matches everything
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(query, self.category)
    }

    #[must_use]
    pub fn with_category(&self, category: DataCategory) -> Self {
        Self::new(self.query.clone(), category)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> DataCategory {
        self.category
    }

    pub fn is_wildcard(&self) -> bool {
        self.query.is_empty() && self.category == DataCategory::All
    }

    /// Text predicate: query is a substring of name or email
    pub fn matches_text<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        if self.query_lowercase.is_empty() {
            return true;
        }
        record.name().to_lowercase().contains(&self.query_lowercase)
            || record
                .email()
                .is_some_and(|e| e.to_lowercase().contains(&self.query_lowercase))
    }

    /// Category predicate: keyword appears in at least one sub-item title
    pub fn matches_category<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        match self.category.keyword() {
            None => true,
            Some(keyword) => record
                .sub_item_titles()
                .iter()
                .any(|title| title.to_lowercase().contains(keyword)),
        }
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_category(record)
    }
}

/// Returns the records matching `criteria`, in their original order
pub fn filter_records<'a, R: Filterable>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    records.iter().filter(|r| criteria.matches(*r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{Contact, RecordId};
    use crate::core::seed::catalog;
    use std::str::FromStr;

    fn contact(id: u32, name: &str, email: &str) -> Contact {
        Contact {
            id: RecordId(id),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn ids<R>(records: &[&R], id: impl Fn(&R) -> RecordId) -> Vec<u32> {
        records.iter().map(|r| id(*r).0).collect()
    }

    #[test]
    fn test_query_jo_matches_john_only() {
        let records = vec![
            contact(1, "Jane Smith", "jane@example.com"),
            contact(2, "John Doe", "john@example.com"),
        ];
        let result = filter_records(&records, &FilterCriteria::new("jo", DataCategory::All));
        assert_eq!(ids(&result, |c| c.id), vec![2]);
    }

    #[test]
    fn test_query_matches_email_when_name_does_not() {
        let records = vec![contact(1, "Jane Smith", "js@corp.example")];
        let result = filter_records(&records, &FilterCriteria::new("CORP", DataCategory::All));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = vec![contact(1, "Jane Smith", "jane@example.com")];
        let result = filter_records(&records, &FilterCriteria::new("sMiTh", DataCategory::All));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let records = vec![contact(1, "Jane Smith", "jane@example.com")];
        let result = filter_records(&records, &FilterCriteria::new(" jane", DataCategory::All));
        assert!(result.is_empty());
    }

    #[test]
    fn test_wildcard_returns_everything_in_order() {
        let users = &catalog().shared_users;
        let result = filter_records(users, &FilterCriteria::all());
        assert_eq!(ids(&result, |u| u.id), vec![1, 2, 3]);
    }

    #[test]
    fn test_category_matches_dataset_titles() {
        let users = &catalog().shared_users;

        let steps = filter_records(users, &FilterCriteria::new("", DataCategory::Steps));
        assert_eq!(ids(&steps, |u| u.id), vec![1, 3]);

        let sleep = filter_records(users, &FilterCriteria::new("", DataCategory::Sleep));
        assert_eq!(ids(&sleep, |u| u.id), vec![1, 2]);

        let mood = filter_records(users, &FilterCriteria::new("", DataCategory::Mood));
        assert_eq!(ids(&mood, |u| u.id), vec![1, 2, 3]);
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let users = &catalog().shared_users;
        let result = filter_records(users, &FilterCriteria::new("john", DataCategory::Steps));
        assert!(result.is_empty());

        let result = filter_records(users, &FilterCriteria::new("sarah", DataCategory::Steps));
        assert_eq!(ids(&result, |u| u.id), vec![3]);
    }

    #[test]
    fn test_category_on_records_without_sub_items_matches_nothing() {
        let records = vec![contact(1, "Sleepy Steps", "mood@example.com")];
        let result = filter_records(&records, &FilterCriteria::new("", DataCategory::Sleep));
        assert!(result.is_empty());
    }

    #[test]
    fn test_with_query_keeps_category() {
        let criteria = FilterCriteria::new("a", DataCategory::Mood).with_query("b");
        assert_eq!(criteria.query(), "b");
        assert_eq!(criteria.category(), DataCategory::Mood);

        let criteria = criteria.with_category(DataCategory::All);
        assert_eq!(criteria.query(), "b");
        assert!(!criteria.is_wildcard());
        assert!(criteria.with_query("").is_wildcard());
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!(DataCategory::from_str("steps").unwrap(), DataCategory::Steps);
        assert_eq!(DataCategory::from_str("SLEEP").unwrap(), DataCategory::Sleep);
        assert_eq!(DataCategory::from_str("all").unwrap(), DataCategory::All);
        assert!(DataCategory::from_str("weight").is_err());
        assert_eq!(DataCategory::All.to_string(), "All Data");
        assert_eq!(DataCategory::Mood.to_string(), "Mood");
    }
}
