//! Shell UI state: sidebar mode, the single open overlay, and the logout phase.
//!
//! At most one overlay (notification dropdown, profile menu, logout dialog)
//! is open at a time. While the logout dialog is up, dropdown toggles are
//! ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn is_collapsed(&self) -> bool {
        matches!(self, SidebarMode::Collapsed)
    }

    pub fn toggled(&self) -> SidebarMode {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    Notifications,
    ProfileMenu,
    LogoutConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutPhase {
    #[default]
    Idle,
    ConfirmPending,
    InFlight,
    LoggedOut,
}

/// What the caller should do once the logout request settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    NavigateToLogin,
    StayPut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub sidebar: SidebarMode,
    overlay: Overlay,
    logout: LogoutPhase,
}

impl ShellState {
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn logout_phase(&self) -> LogoutPhase {
        self.logout
    }

    pub fn notifications_open(&self) -> bool {
        self.overlay == Overlay::Notifications
    }

    pub fn profile_menu_open(&self) -> bool {
        self.overlay == Overlay::ProfileMenu
    }

    pub fn logout_dialog_visible(&self) -> bool {
        self.overlay == Overlay::LogoutConfirm
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar = self.sidebar.toggled();
    }

    pub fn toggle_notifications(&mut self) {
        self.toggle_dropdown(Overlay::Notifications);
    }

    pub fn toggle_profile_menu(&mut self) {
        self.toggle_dropdown(Overlay::ProfileMenu);
    }

    /// Close whichever dropdown is open. The logout dialog only closes
    /// through cancel or confirm.
    pub fn close_dropdowns(&mut self) {
        if matches!(self.overlay, Overlay::Notifications | Overlay::ProfileMenu) {
            self.overlay = Overlay::Hidden;
        }
    }

    /// Logout menu click: open the confirmation dialog
    pub fn request_logout(&mut self) {
        if matches!(self.logout, LogoutPhase::Idle) {
            self.overlay = Overlay::LogoutConfirm;
            self.logout = LogoutPhase::ConfirmPending;
        }
    }

    pub fn cancel_logout(&mut self) {
        if self.logout == LogoutPhase::ConfirmPending {
            self.overlay = Overlay::Hidden;
            self.logout = LogoutPhase::Idle;
        }
    }

    /// Close the dialog and move to in-flight. Returns true when the caller
    /// should issue the logout request.
    pub fn confirm_logout(&mut self) -> bool {
        if self.logout != LogoutPhase::ConfirmPending {
            return false;
        }
        self.overlay = Overlay::Hidden;
        self.logout = LogoutPhase::InFlight;
        true
    }

    pub fn finish_logout<T, E>(&mut self, result: &Result<T, E>) -> LogoutOutcome {
        if self.logout != LogoutPhase::InFlight {
            return LogoutOutcome::StayPut;
        }
        match result {
            Ok(_) => {
                self.logout = LogoutPhase::LoggedOut;
                LogoutOutcome::NavigateToLogin
            }
            Err(_) => {
                self.logout = LogoutPhase::Idle;
                LogoutOutcome::StayPut
            }
        }
    }

    fn toggle_dropdown(&mut self, target: Overlay) {
        if self.overlay == Overlay::LogoutConfirm {
            return;
        }
        self.overlay = if self.overlay == target {
            Overlay::Hidden
        } else {
            target
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdowns_are_exclusive() {
        let mut state = ShellState::default();

        state.toggle_notifications();
        assert!(state.notifications_open());

        state.toggle_profile_menu();
        assert!(state.profile_menu_open());
        assert!(!state.notifications_open());

        state.toggle_profile_menu();
        assert_eq!(state.overlay(), Overlay::Hidden);
    }

    #[test]
    fn test_sidebar_toggle_does_not_touch_overlay() {
        let mut state = ShellState::default();
        state.toggle_notifications();

        state.toggle_sidebar();
        assert!(state.sidebar.is_collapsed());
        assert!(state.notifications_open());

        state.toggle_sidebar();
        assert_eq!(state.sidebar, SidebarMode::Expanded);
    }

    #[test]
    fn test_logout_request_replaces_profile_menu() {
        let mut state = ShellState::default();
        state.toggle_profile_menu();

        state.request_logout();

        assert!(state.logout_dialog_visible());
        assert!(!state.profile_menu_open());
        assert_eq!(state.logout_phase(), LogoutPhase::ConfirmPending);
    }

    #[test]
    fn test_dialog_blocks_dropdowns() {
        let mut state = ShellState::default();
        state.request_logout();

        state.toggle_notifications();
        state.close_dropdowns();

        assert!(state.logout_dialog_visible());
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut state = ShellState::default();
        state.request_logout();
        state.cancel_logout();

        assert_eq!(state, ShellState::default());
    }

    #[test]
    fn test_confirm_then_success_logs_out() {
        let mut state = ShellState::default();
        state.request_logout();

        assert!(state.confirm_logout());
        assert!(!state.logout_dialog_visible());
        assert_eq!(state.logout_phase(), LogoutPhase::InFlight);

        let outcome = state.finish_logout(&Ok::<(), ()>(()));
        assert_eq!(outcome, LogoutOutcome::NavigateToLogin);
        assert_eq!(state.logout_phase(), LogoutPhase::LoggedOut);
    }

    #[test]
    fn test_confirm_then_failure_returns_to_idle() {
        let mut state = ShellState::default();
        state.request_logout();
        state.confirm_logout();

        let outcome = state.finish_logout(&Err::<(), _>("boom"));

        assert_eq!(outcome, LogoutOutcome::StayPut);
        assert_eq!(state.logout_phase(), LogoutPhase::Idle);
        assert!(!state.logout_dialog_visible());
    }

    #[test]
    fn test_confirm_without_pending_is_ignored() {
        let mut state = ShellState::default();
        assert!(!state.confirm_logout());
        assert_eq!(state.finish_logout(&Ok::<(), ()>(())), LogoutOutcome::StayPut);
        assert_eq!(state.logout_phase(), LogoutPhase::Idle);
    }
}
