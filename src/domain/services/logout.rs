use std::future::Future;

use crate::shared::errors::Result;
use crate::shared::logging;

/// Anything that can end the current server session
pub trait SessionEndpoint {
    /// Where the request goes, for diagnostics
    fn describe(&self) -> String;

    fn end_session(&self) -> impl Future<Output = Result<()>>;
}

/// Issue the logout request once and report how it went.
///
/// Failures are only logged; there is no retry and nothing is surfaced to
/// the user.
pub async fn end_session<E: SessionEndpoint>(endpoint: &E) -> Result<()> {
    let target = endpoint.describe();
    logging::log_logout_start(&target);

    let result = endpoint.end_session().await;
    match &result {
        Ok(()) => logging::log_logout_success(&target),
        Err(e) => logging::log_logout_failure(&target, &e.to_string()),
    }
    result
}
