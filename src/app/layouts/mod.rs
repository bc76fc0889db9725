pub mod breadcrumbs;
pub mod header;
pub mod shell;
pub mod sidebar;

pub use breadcrumbs::Breadcrumbs;
pub use header::Header;
pub use shell::DashboardShell;
pub use sidebar::Sidebar;
