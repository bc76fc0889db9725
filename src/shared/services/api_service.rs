#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use web_sys::RequestCredentials;

use crate::config::DashboardConfig;
use crate::domain::services::SessionEndpoint;
use crate::shared::errors::{AppError, Result};

// API Service for the auth backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    logout_url: String,
}

impl ApiService {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            logout_url: config.logout_url(),
        }
    }

    // POST with cookies attached, body ignored
    #[cfg(target_arch = "wasm32")]
    async fn post_with_credentials(url: &str) -> Result<()> {
        let response = Request::post(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        if !response.ok() {
            return Err(AppError::LogoutRejected {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        Ok(())
    }

    // Native builds have no browser cookie store; the request goes out bare
    #[cfg(not(target_arch = "wasm32"))]
    async fn post_with_credentials(url: &str) -> Result<()> {
        let response = reqwest::Client::new().post(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::LogoutRejected {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        Self::post_with_credentials(&self.logout_url).await
    }
}

impl SessionEndpoint for ApiService {
    fn describe(&self) -> String {
        self.logout_url.clone()
    }

    async fn end_session(&self) -> Result<()> {
        self.logout().await
    }
}
