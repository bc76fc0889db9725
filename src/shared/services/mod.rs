// Shared services
// ApiService talks to the auth backend (gloo-net in the browser, reqwest natively)
pub mod api_service;

pub use api_service::ApiService;
