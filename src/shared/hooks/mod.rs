// Custom Dioxus hooks
pub mod use_logout;
pub mod use_notifications;
pub mod use_shell_state;

pub use use_logout::use_logout;
pub use use_notifications::{use_notifications, NotificationsState};
pub use use_shell_state::use_shell_state;
