pub mod logout_dialog;
pub mod notification_panel;
pub mod profile_menu;

pub use logout_dialog::LogoutDialog;
pub use notification_panel::NotificationPanel;
pub use profile_menu::ProfileMenu;
