use dioxus::prelude::*;

use crate::app::components::{NotificationPanel, ProfileMenu};
use crate::domain::models::{Destination, ShellState};
use crate::shared::hooks::NotificationsState;

/// Top bar: notification bell with badge, profile avatar with its menu
#[component]
pub fn Header(
    shell: Signal<ShellState>,
    notifications: NotificationsState,
    profile_name: String,
    app_version: String,
    on_navigate: EventHandler<Destination>,
) -> Element {
    let mut shell = shell;
    let state = *shell.read();
    let badge_count = notifications.badge_count();

    rsx! {
        header { class: "c-header",
            div { class: "c-header__actions",
                div { class: "c-header__dropdown",
                    button {
                        class: "c-header__bell",
                        aria_label: "Notifications",
                        onclick: move |_| shell.write().toggle_notifications(),
                        "🔔"
                        if badge_count > 0 {
                            span { class: "c-header__badge", "{badge_count}" }
                        }
                    }
                    if state.notifications_open() {
                        NotificationPanel {
                            notifications,
                            on_close: move |_| shell.write().close_dropdowns(),
                        }
                    }
                }

                div { class: "c-header__dropdown",
                    button {
                        class: "c-header__avatar",
                        aria_label: "Profile menu",
                        onclick: move |_| shell.write().toggle_profile_menu(),
                        "👤"
                    }
                    if state.profile_menu_open() {
                        ProfileMenu {
                            profile_name,
                            app_version,
                            on_navigate,
                            on_logout: move |_| shell.write().request_logout(),
                        }
                    }
                }
            }
        }
    }
}
