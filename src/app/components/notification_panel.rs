use dioxus::prelude::*;

use crate::domain::models::{Category, Notification};
use crate::shared::hooks::NotificationsState;

/// Dropdown under the bell: category filters, bulk actions, the list
#[component]
pub fn NotificationPanel(notifications: NotificationsState, on_close: EventHandler<()>) -> Element {
    let mut notifications = notifications;
    let visible = notifications.visible();
    let nothing_visible = visible.is_empty();

    rsx! {
        div { class: "c-notifications",
            onclick: move |evt| evt.stop_propagation(),

            div { class: "c-notifications__toolbar",
                div { class: "c-notifications__filters",
                    for category in Category::ALL {
                        label { class: "c-notifications__filter",
                            input {
                                r#type: "checkbox",
                                checked: notifications.is_enabled(category),
                                onchange: move |_| notifications.toggle_filter(category),
                            }
                            {category.label()}
                        }
                    }
                }

                div { class: "c-notifications__actions",
                    button {
                        class: "c-button c-button--primary",
                        onclick: move |_| notifications.mark_all_read(),
                        "Mark All as Read"
                    }
                    button {
                        class: "c-button c-button--primary",
                        onclick: move |_| on_close.call(()),
                        "✕ Close"
                    }
                }
            }

            ul { class: "c-notifications__list",
                if nothing_visible {
                    li { class: "c-notifications__empty", "No notifications" }
                }
                for item in visible {
                    NotificationItem {
                        key: "{item.category:?}-{item.id}",
                        notification: item.clone(),
                        on_toggle_read: move |_| notifications.toggle_read(item.id, item.category),
                        on_remove: move |_| notifications.remove(item.id, item.category),
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(
    notification: Notification,
    on_toggle_read: EventHandler<()>,
    on_remove: EventHandler<()>,
) -> Element {
    let category = notification.category.as_str();
    let read_class = if notification.read {
        "c-notification__status c-notification__status--read"
    } else {
        "c-notification__status"
    };
    let tooltip = if notification.read {
        "Mark as Unread"
    } else {
        "Mark as Read"
    };

    rsx! {
        li { class: "c-notification c-notification--{category}",
            div { class: "c-notification__body",
                div { class: "c-notification__title", "{notification.message}" }
                div { class: "c-notification__description", "{notification.description}" }
            }
            div { class: "c-notification__actions",
                button {
                    class: "{read_class}",
                    title: "{tooltip}",
                    aria_label: "{tooltip}",
                    onclick: move |_| on_toggle_read.call(()),
                    "✔"
                }
                button {
                    class: "c-notification__remove",
                    title: "Remove",
                    aria_label: "Remove",
                    onclick: move |_| on_remove.call(()),
                    "✕"
                }
            }
        }
    }
}
