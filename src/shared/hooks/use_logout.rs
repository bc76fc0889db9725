use dioxus::prelude::*;

use crate::domain::models::{LogoutOutcome, ShellState};
use crate::domain::services::{end_session, SessionEndpoint};

/// Returns the confirm handler for the logout dialog.
///
/// Confirming closes the dialog right away, then sends the request in the
/// background. `on_logged_out` runs only after a successful response.
pub fn use_logout<E>(
    mut shell: Signal<ShellState>,
    endpoint: E,
    on_logged_out: impl Fn() + Clone + 'static,
) -> impl FnMut() + Clone
where
    E: SessionEndpoint + Clone + 'static,
{
    move || {
        if !shell.write().confirm_logout() {
            return;
        }
        let endpoint = endpoint.clone();
        let on_logged_out = on_logged_out.clone();
        spawn(async move {
            let result = end_session(&endpoint).await;
            if shell.write().finish_logout(&result) == LogoutOutcome::NavigateToLogin {
                on_logged_out();
            }
        });
    }
}
