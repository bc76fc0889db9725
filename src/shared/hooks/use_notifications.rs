use dioxus::prelude::*;

use crate::domain::models::{Category, CategoryFilter, Notification, NotificationBook};
use crate::shared::logging;

/// Notification panel state: the book itself plus the category filter
#[derive(Clone, Copy, PartialEq)]
pub struct NotificationsState {
    pub book: Signal<NotificationBook>,
    pub filter: Signal<CategoryFilter>,
}

impl NotificationsState {
    pub fn badge_count(&self) -> usize {
        self.book.read().unread_count()
    }

    pub fn visible(&self) -> Vec<Notification> {
        self.book.read().visible(&self.filter.read())
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.filter.read().contains(category)
    }

    pub fn toggle_filter(&mut self, category: Category) {
        let enabled = self.filter.write().toggle(category);
        logging::log_filter_change(category, enabled);
    }

    /// Flip the read flag of one entry
    pub fn toggle_read(&mut self, id: u32, category: Category) {
        let now_read = self.book.write().toggle_read(id, category);
        let action = match now_read {
            Some(true) => "mark_read",
            Some(false) => "mark_unread",
            None => "toggle_read",
        };
        logging::log_notification_change(action, category, id, now_read.is_some());
    }

    pub fn mark_read(&mut self, id: u32, category: Category) {
        let found = self.book.write().mark_read(id, category);
        logging::log_notification_change("mark_read", category, id, found);
    }

    pub fn mark_unread(&mut self, id: u32, category: Category) {
        let found = self.book.write().mark_unread(id, category);
        logging::log_notification_change("mark_unread", category, id, found);
    }

    pub fn mark_all_read(&mut self) {
        let previously_unread = self.badge_count();
        self.book.write().mark_all_read();
        logging::log_mark_all_read(previously_unread);
    }

    pub fn remove(&mut self, id: u32, category: Category) {
        let found = self.book.write().remove(id, category);
        logging::log_notification_change("remove", category, id, found);
    }
}

/// Hook to own the notification state for the lifetime of the caller.
/// `initial` runs once on mount.
pub fn use_notifications(initial: impl FnOnce() -> NotificationBook) -> NotificationsState {
    let book = use_signal(initial);
    let filter = use_signal(CategoryFilter::all);

    NotificationsState { book, filter }
}
