//! Set-membership selection with toggle semantics

use crate::core::records::RecordId;
use std::collections::BTreeSet;

/// Set of selected record identifiers
///
/// Membership is binary and duplicates are impossible. The only mutation
/// screens perform is [`SelectionSet::toggle`]; iteration is in ascending id
/// order so rendering and logging are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection pre-populated with `ids`
    pub fn with_preset(ids: impl IntoIterator<Item = RecordId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Removes `id` if present, adds it otherwise
    #[must_use]
    pub fn toggle(mut self, id: RecordId) -> Self {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        self
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn clear(mut self) -> Self {
        self.ids.clear();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RecordId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = RecordId>>(iter: T) -> Self {
        Self::with_preset(iter)
    }
}

/// Free-function form of [`SelectionSet::toggle`]
#[must_use]
pub fn toggle(set: SelectionSet, id: RecordId) -> SelectionSet {
    set.toggle(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u32]) -> SelectionSet {
        values.iter().copied().map(RecordId).collect()
    }

    #[test]
    fn test_toggle_removes_then_restores() {
        let set = ids(&[1, 2]);
        let once = toggle(set.clone(), RecordId(1));
        assert_eq!(once, ids(&[2]));
        let twice = toggle(once, RecordId(1));
        assert_eq!(twice, ids(&[1, 2]));
    }

    #[test]
    fn test_toggle_unknown_id_adds_it() {
        let set = SelectionSet::new().toggle(RecordId(999));
        assert!(set.contains(RecordId(999)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_preset_deduplicates() {
        let set = SelectionSet::with_preset([RecordId(3), RecordId(3), RecordId(1)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![RecordId(1), RecordId(3)]);
    }

    #[test]
    fn test_clear_empties_set() {
        let set = ids(&[1, 2, 3]).clear();
        assert!(set.is_empty());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_set() -> impl Strategy<Value = SelectionSet> {
        proptest::collection::btree_set(0u32..64, 0..16)
            .prop_map(|s| s.into_iter().map(RecordId).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            max_global_rejects: 8192,
            ..ProptestConfig::default()
        })]

        #[test]
        fn test_double_toggle_is_identity(set in arb_set(), id in 0u32..64) {
            let id = RecordId(id);
            prop_assert_eq!(toggle(toggle(set.clone(), id), id), set);
        }

        #[test]
        fn test_toggle_absent_grows_by_one(set in arb_set(), id in 0u32..64) {
            let id = RecordId(id);
            prop_assume!(!set.contains(id));
            let before = set.len();
            let after = toggle(set, id);
            prop_assert!(after.contains(id));
            prop_assert_eq!(after.len(), before + 1);
        }

        #[test]
        fn test_toggle_present_shrinks_by_one(set in arb_set(), id in 0u32..64) {
            let id = RecordId(id);
            prop_assume!(set.contains(id));
            let before = set.len();
            let after = toggle(set, id);
            prop_assert!(!after.contains(id));
            prop_assert_eq!(after.len(), before - 1);
        }
    }
}
