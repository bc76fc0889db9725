use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Logout rejected with HTTP {status}: {status_text}")]
    LogoutRejected { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
