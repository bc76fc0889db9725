use dioxus::prelude::*;

use crate::app::components::LogoutDialog;
use crate::app::layouts::{Breadcrumbs, Header, Sidebar};
use crate::app::pages::Route;
use crate::config::DashboardConfig;
use crate::domain::models::{Destination, NotificationBook};
use crate::shared::hooks::{use_logout, use_notifications, use_shell_state};
use crate::shared::logging;
use crate::shared::services::ApiService;

/// Admin shell: sidebar, header, breadcrumbs and the routed content slot.
/// Owns every piece of shell state; children get signals and callbacks.
#[component]
pub fn DashboardShell() -> Element {
    let config = use_context::<DashboardConfig>();
    let per_category = config.notifications_per_category;

    let notifications = use_notifications(move || NotificationBook::synthetic(per_category));
    let mut shell = use_shell_state();

    let current_path = use_route::<Route>().to_string();
    let nav = navigator();
    let login_nav = navigator();

    let path_for_logout = current_path.clone();
    let mut confirm_logout = use_logout(shell, ApiService::from_config(&config), move || {
        logging::log_navigation(&path_for_logout, Destination::Login.path());
        login_nav.push(Route::from(Destination::Login));
    });

    let path_for_nav = current_path.clone();
    let navigate = move |destination: Destination| {
        logging::log_navigation(&path_for_nav, destination.path());
        shell.write().close_dropdowns();
        nav.push(Route::from(destination));
    };

    let state = *shell.read();
    let layout_class = if state.sidebar.is_collapsed() {
        "c-shell c-shell--collapsed"
    } else {
        "c-shell"
    };
    let dropdown_open = state.notifications_open() || state.profile_menu_open();

    rsx! {
        div { class: "{layout_class}",
            Sidebar {
                mode: state.sidebar,
                current_path: current_path.clone(),
                on_toggle: move |_| shell.write().toggle_sidebar(),
                on_select: navigate.clone(),
            }

            div { class: "c-shell__main",
                Header {
                    shell,
                    notifications,
                    profile_name: config.profile_name.clone(),
                    app_version: config.app_version.clone(),
                    on_navigate: navigate,
                }

                Breadcrumbs { path: current_path.clone() }

                main { class: "c-shell__content",
                    Outlet::<Route> {}
                }
            }

            // Click-away layer for open dropdowns
            if dropdown_open {
                div {
                    class: "c-shell__backdrop",
                    onclick: move |_| shell.write().close_dropdowns(),
                }
            }

            LogoutDialog {
                visible: state.logout_dialog_visible(),
                on_confirm: move |_| confirm_logout(),
                on_cancel: move |_| shell.write().cancel_logout(),
            }
        }
    }
}
