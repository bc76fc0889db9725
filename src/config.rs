//! Runtime configuration for the dashboard shell.
//!
//! The API base URL is fixed at build time (`ADMIN_API_URL`), the same way a
//! browser bundle bakes in its backend address.

pub const DEFAULT_API_URL: &str = "http://localhost:3401";
pub const DEFAULT_PROFILE_NAME: &str = "John Doe";
pub const DEFAULT_NOTIFICATIONS_PER_CATEGORY: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub profile_name: String,
    pub app_version: String,
    pub notifications_per_category: usize,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("ADMIN_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
            app_version: format!("V{}", env!("CARGO_PKG_VERSION")),
            notifications_per_category: DEFAULT_NOTIFICATIONS_PER_CATEGORY,
        }
    }

    pub fn logout_url(&self) -> String {
        format!("{}/auth/logout", self.api_base_url.trim_end_matches('/'))
    }
}
