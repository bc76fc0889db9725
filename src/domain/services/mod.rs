// Business logic services
// Framework-agnostic, 100% testable

pub mod logout;

pub use logout::{end_session, SessionEndpoint};
