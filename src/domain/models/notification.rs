use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::shared::logging;

/// Notification category, ordered the way the panel lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Error,
    Warning,
    Success,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Error, Category::Warning, Category::Success];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Success => "success",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Error => "Error",
            Category::Warning => "Warning",
            Category::Success => "Success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub category: Category,
    pub message: String,
    pub description: String,
    pub read: bool,
}

impl Notification {
    /// Synthetic unread entry, numbered from 1 in its text
    pub fn synthetic(id: u32, category: Category) -> Self {
        let n = id + 1;
        Self {
            id,
            category,
            message: format!("{} Notification {}", category.label(), n),
            description: format!("{} details {}", category.label(), n),
            read: false,
        }
    }
}

/// Set of categories currently shown in the notification list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    enabled: BTreeSet<Category>,
}

impl CategoryFilter {
    pub fn all() -> Self {
        Self {
            enabled: Category::ALL.into_iter().collect(),
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.enabled.contains(&category)
    }

    /// Flip a category in or out of the set. Returns whether it is now enabled.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.enabled.remove(&category) {
            false
        } else {
            self.enabled.insert(category);
            true
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// In-memory notification lists, one per category.
///
/// Every mutator rebuilds only the addressed list and leaves entries it does
/// not address untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationBook {
    lists: BTreeMap<Category, Vec<Notification>>,
}

impl NotificationBook {
    /// Build from an initial set of entries. Each entry is filed under its own
    /// category; within a category the given order is kept. Ids are unique
    /// per category: a repeated id keeps the first entry and drops the rest.
    pub fn new(entries: impl IntoIterator<Item = Notification>) -> Self {
        let mut lists: BTreeMap<Category, Vec<Notification>> =
            Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        for entry in entries {
            let list = lists.entry(entry.category).or_default();
            if list.iter().any(|n| n.id == entry.id) {
                logging::log_duplicate_notification(entry.category, entry.id);
                continue;
            }
            list.push(entry);
        }
        Self { lists }
    }

    /// `per_category` unread synthetic entries for every category, ids `0..per_category`
    pub fn synthetic(per_category: usize) -> Self {
        let per_category = u32::try_from(per_category).unwrap_or(u32::MAX);
        Self::new(
            Category::ALL
                .into_iter()
                .flat_map(|c| (0..per_category).map(move |id| Notification::synthetic(id, c))),
        )
    }

    pub fn category(&self, category: Category) -> &[Notification] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: u32, category: Category) -> Option<&Notification> {
        self.category(category).iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unread entries across every category, regardless of any filter
    pub fn unread_count(&self) -> usize {
        self.lists.values().flatten().filter(|n| !n.read).count()
    }

    /// Flattened list for display: categories in order, entries in stored order
    pub fn visible(&self, filter: &CategoryFilter) -> Vec<Notification> {
        self.lists
            .iter()
            .filter(|(category, _)| filter.contains(**category))
            .flat_map(|(_, list)| list.iter().cloned())
            .collect()
    }

    pub fn mark_read(&mut self, id: u32, category: Category) -> bool {
        self.set_read(id, category, true)
    }

    pub fn mark_unread(&mut self, id: u32, category: Category) -> bool {
        self.set_read(id, category, false)
    }

    /// Flip the read flag of one entry. Returns the new flag, or `None` when
    /// the id is not in that category.
    pub fn toggle_read(&mut self, id: u32, category: Category) -> Option<bool> {
        let entry = self
            .lists
            .get_mut(&category)?
            .iter_mut()
            .find(|n| n.id == id)?;
        entry.read = !entry.read;
        Some(entry.read)
    }

    pub fn mark_all_read(&mut self) {
        for entry in self.lists.values_mut().flatten() {
            entry.read = true;
        }
    }

    /// Drop one entry. Returns false when the id is not in that category.
    pub fn remove(&mut self, id: u32, category: Category) -> bool {
        let Some(list) = self.lists.get_mut(&category) else {
            return false;
        };
        match list.iter().position(|n| n.id == id) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    fn set_read(&mut self, id: u32, category: Category, read: bool) -> bool {
        match self
            .lists
            .get_mut(&category)
            .and_then(|list| list.iter_mut().find(|n| n.id == id))
        {
            Some(entry) => {
                entry.read = read;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_categories() -> CategoryFilter {
        CategoryFilter {
            enabled: BTreeSet::new(),
        }
    }

    fn ids(list: &[Notification]) -> Vec<(Category, u32)> {
        list.iter().map(|n| (n.category, n.id)).collect()
    }

    #[test]
    fn test_synthetic_seed_matches_shape() {
        let book = NotificationBook::synthetic(20);

        assert_eq!(book.len(), 60);
        for category in Category::ALL {
            let list = book.category(category);
            assert_eq!(list.len(), 20);
            assert_eq!(list[0].id, 0);
            assert_eq!(list[19].id, 19);
            assert!(list.iter().all(|n| !n.read && n.category == category));
        }

        let first = book.get(0, Category::Warning).unwrap();
        assert_eq!(first.message, "Warning Notification 1");
        assert_eq!(first.description, "Warning details 1");
    }

    #[test]
    fn test_category_serializes_as_slug() {
        assert_eq!(serde_json::to_string(&Category::Error).unwrap(), "\"error\"");
        let parsed: Category = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, Category::Success);
        assert_eq!(Category::Warning.as_str(), "warning");
    }

    #[test]
    fn test_last_read_flag_operation_wins() {
        let mut book = NotificationBook::synthetic(3);
        let ops = [true, false, false, true, true, false];

        for (step, read) in ops.iter().enumerate() {
            if *read {
                book.mark_read(1, Category::Error);
            } else {
                book.mark_unread(1, Category::Error);
            }
            assert_eq!(book.get(1, Category::Error).unwrap().read, *read, "step {step}");
        }
    }

    #[test]
    fn test_mark_read_leaves_other_entries_untouched() {
        let before = NotificationBook::synthetic(3);
        let mut after = before.clone();

        assert!(after.mark_read(2, Category::Warning));

        for category in Category::ALL {
            for (old, new) in before.category(category).iter().zip(after.category(category)) {
                if category == Category::Warning && old.id == 2 {
                    assert!(new.read);
                } else {
                    assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn test_same_id_in_other_category_is_separate() {
        let mut book = NotificationBook::synthetic(2);
        book.mark_read(0, Category::Error);

        assert!(book.get(0, Category::Error).unwrap().read);
        assert!(!book.get(0, Category::Warning).unwrap().read);
        assert!(!book.get(0, Category::Success).unwrap().read);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let before = NotificationBook::synthetic(2);
        let mut book = before.clone();

        assert!(!book.mark_read(42, Category::Error));
        assert!(!book.mark_unread(42, Category::Success));
        assert!(!book.remove(42, Category::Warning));
        assert_eq!(book, before);
    }

    #[test]
    fn test_remove_shrinks_only_that_category() {
        let mut book = NotificationBook::synthetic(5);

        assert!(book.remove(3, Category::Success));

        assert_eq!(book.category(Category::Success).len(), 4);
        assert!(book.get(3, Category::Success).is_none());
        assert_eq!(book.category(Category::Error).len(), 5);
        assert_eq!(book.category(Category::Warning).len(), 5);
        assert_eq!(
            book.category(Category::Success).iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![0, 1, 2, 4]
        );
    }

    #[test]
    fn test_mark_all_read_ignores_filter() {
        let mut book = NotificationBook::synthetic(4);
        let mut filter = CategoryFilter::all();
        filter.toggle(Category::Error);

        book.mark_all_read();

        assert_eq!(book.unread_count(), 0);
        assert!(book.category(Category::Error).iter().all(|n| n.read));
    }

    #[test]
    fn test_unread_count_independent_of_filter() {
        let mut book = NotificationBook::synthetic(4);
        book.mark_read(0, Category::Error);
        book.mark_read(1, Category::Warning);
        book.remove(2, Category::Success);

        let expected = Category::ALL
            .into_iter()
            .flat_map(|c| book.category(c).iter())
            .filter(|n| !n.read)
            .count();
        assert_eq!(expected, 9);
        assert_eq!(book.unread_count(), expected);

        // Filter only shapes the visible list
        let visible = book.visible(&no_categories());
        assert!(visible.is_empty());
        assert_eq!(book.unread_count(), expected);
    }

    #[test]
    fn test_visible_keeps_category_then_stored_order() {
        let book = NotificationBook::new(vec![
            Notification::synthetic(7, Category::Success),
            Notification::synthetic(1, Category::Error),
            Notification::synthetic(5, Category::Warning),
            Notification::synthetic(0, Category::Error),
        ]);

        assert_eq!(
            ids(&book.visible(&CategoryFilter::all())),
            vec![
                (Category::Error, 1),
                (Category::Error, 0),
                (Category::Warning, 5),
                (Category::Success, 7),
            ]
        );
    }

    #[test]
    fn test_toggle_filter_out_and_back_restores_order() {
        let book = NotificationBook::synthetic(3);
        let mut filter = CategoryFilter::all();
        let full = book.visible(&filter);

        assert!(!filter.toggle(Category::Warning));
        let without = book.visible(&filter);
        assert_eq!(without.len(), full.len() - 3);
        assert!(without.iter().all(|n| n.category != Category::Warning));
        let expected: Vec<_> = full
            .iter()
            .filter(|n| n.category != Category::Warning)
            .cloned()
            .collect();
        assert_eq!(without, expected);

        assert!(filter.toggle(Category::Warning));
        assert_eq!(book.visible(&filter), full);
    }

    #[test]
    fn test_new_drops_repeated_ids_within_category() {
        let mut first = Notification::synthetic(1, Category::Error);
        first.message = "first".to_string();
        let book = NotificationBook::new(vec![
            first,
            Notification::synthetic(1, Category::Error),
            Notification::synthetic(1, Category::Warning),
        ]);

        assert_eq!(book.category(Category::Error).len(), 1);
        assert_eq!(book.get(1, Category::Error).unwrap().message, "first");
        // Same id in another category is a different entry
        assert_eq!(book.category(Category::Warning).len(), 1);
    }

    #[test]
    fn test_repeated_id_fully_handled_by_mutators() {
        let mut book = NotificationBook::new(vec![
            Notification::synthetic(1, Category::Error),
            Notification::synthetic(1, Category::Error),
        ]);

        book.mark_read(1, Category::Error);
        assert_eq!(book.unread_count(), 0);

        book.remove(1, Category::Error);
        assert!(book.category(Category::Error).is_empty());
    }

    #[test]
    fn test_toggle_read_round_trip() {
        let mut book = NotificationBook::synthetic(2);

        assert_eq!(book.toggle_read(1, Category::Success), Some(true));
        assert!(book.get(1, Category::Success).unwrap().read);
        assert_eq!(book.toggle_read(1, Category::Success), Some(false));
        assert!(!book.get(1, Category::Success).unwrap().read);
        assert_eq!(book.toggle_read(1, Category::Success), Some(true));

        // Neighbours untouched
        assert!(!book.get(0, Category::Success).unwrap().read);
        assert!(!book.get(1, Category::Error).unwrap().read);
    }

    #[test]
    fn test_toggle_read_missing_id_is_noop() {
        let before = NotificationBook::synthetic(2);
        let mut book = before.clone();

        assert_eq!(book.toggle_read(9, Category::Warning), None);
        assert_eq!(book, before);
    }

    #[test]
    fn test_empty_book() {
        let book = NotificationBook::default();
        assert!(book.is_empty());
        assert_eq!(book.unread_count(), 0);
        assert!(book.category(Category::Error).is_empty());
    }
}
