// Domain models (dashboard shell state)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod notification;
pub mod shell;

pub use navigation::{breadcrumbs, Crumb, Destination, NavEntry, SIDEBAR_ENTRIES};
pub use notification::{Category, CategoryFilter, Notification, NotificationBook};
pub use shell::{LogoutOutcome, LogoutPhase, Overlay, ShellState, SidebarMode};
