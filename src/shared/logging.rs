//! Structured logging for the dashboard shell
//!
//! One helper per event so call sites stay short and field names stay
//! consistent. Uses tracing structured fields keyed by `operation`.

use crate::domain::models::Category;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Notifications,
    Navigation,
    Logout,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Notifications => "notifications",
            LogOperation::Navigation => "navigation",
            LogOperation::Logout => "logout",
        }
    }
}

/// Log a single-entry mutation (mark read/unread, remove)
pub fn log_notification_change(action: &str, category: Category, id: u32, found: bool) {
    if found {
        tracing::debug!(
            operation = LogOperation::Notifications.as_str(),
            action = action,
            category = category.as_str(),
            notification_id = id,
            "Notification updated"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::Notifications.as_str(),
            action = action,
            category = category.as_str(),
            notification_id = id,
            "Notification not found - nothing changed"
        );
    }
}

/// Initial state carried an id already seen in that category
pub fn log_duplicate_notification(category: Category, id: u32) {
    tracing::debug!(
        operation = LogOperation::Notifications.as_str(),
        category = category.as_str(),
        notification_id = id,
        "Dropped notification with repeated id"
    );
}

pub fn log_mark_all_read(previously_unread: usize) {
    tracing::debug!(
        operation = LogOperation::Notifications.as_str(),
        action = "mark_all_read",
        previously_unread = previously_unread,
        "Marked every notification as read"
    );
}

pub fn log_filter_change(category: Category, enabled: bool) {
    tracing::trace!(
        operation = LogOperation::Notifications.as_str(),
        category = category.as_str(),
        enabled = enabled,
        "Notification filter toggled"
    );
}

/// Log a client-side navigation issued by the shell
pub fn log_navigation(from: &str, to: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        from = from,
        to = to,
        "Navigating"
    );
}

pub fn log_logout_start(target: &str) {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        target = target,
        "Sending logout request"
    );
}

pub fn log_logout_success(target: &str) {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        target = target,
        "Logged out"
    );
}

/// Failures go to the diagnostic channel only; the UI shows nothing
pub fn log_logout_failure(target: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Logout.as_str(),
        target = target,
        error = error,
        "Failed to log out"
    );
}
