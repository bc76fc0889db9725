use dioxus::prelude::*;

use crate::domain::models::{Destination, SidebarMode, SIDEBAR_ENTRIES};

/// Collapsible navigation sidebar. Collapsing only changes layout.
#[component]
pub fn Sidebar(
    mode: SidebarMode,
    current_path: String,
    on_toggle: EventHandler<()>,
    on_select: EventHandler<Destination>,
) -> Element {
    let collapsed = mode.is_collapsed();
    let sidebar_class = if collapsed {
        "c-sidebar c-sidebar--collapsed"
    } else {
        "c-sidebar"
    };

    rsx! {
        aside { class: "{sidebar_class}",
            div { class: "c-sidebar__logo",
                if collapsed {
                    span { class: "c-sidebar__logo-mark", "AD" }
                } else {
                    span { class: "c-sidebar__logo-text", "Admin Dashboard" }
                }
            }
            hr { class: "c-sidebar__divider" }

            nav { class: "c-sidebar__nav",
                for entry in SIDEBAR_ENTRIES {
                    button {
                        key: "{entry.label}",
                        class: if entry.is_active(&current_path) { "c-sidebar__item c-sidebar__item--active" } else { "c-sidebar__item" },
                        title: "{entry.label}",
                        onclick: move |_| on_select.call(entry.destination),
                        span { class: "c-sidebar__icon", "{entry.icon}" }
                        if !collapsed {
                            span { class: "c-sidebar__label", "{entry.label}" }
                        }
                    }
                }
            }

            button {
                class: "c-sidebar__collapse",
                aria_label: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                onclick: move |_| on_toggle.call(()),
                if collapsed { "»" } else { "«" }
            }
        }
    }
}
