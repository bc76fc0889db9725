use dioxus::prelude::*;

use crate::domain::models::ShellState;

/// Hook to own the shell UI state (sidebar mode, open overlay, logout phase)
pub fn use_shell_state() -> Signal<ShellState> {
    use_signal(ShellState::default)
}
