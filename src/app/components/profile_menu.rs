use dioxus::prelude::*;

use crate::domain::models::Destination;

/// Dropdown under the avatar
#[component]
pub fn ProfileMenu(
    profile_name: String,
    app_version: String,
    on_navigate: EventHandler<Destination>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        ul { class: "c-menu",
            onclick: move |evt| evt.stop_propagation(),

            li {
                button {
                    class: "c-menu__item",
                    onclick: move |_| on_navigate.call(Destination::Profile),
                    span { class: "c-menu__icon", "👤" }
                    "{profile_name}"
                }
            }
            li {
                button { class: "c-menu__item", disabled: true,
                    span { class: "c-menu__icon", "🔒" }
                    "{app_version}"
                }
            }
            li { class: "c-menu__divider", role: "separator" }
            li {
                button {
                    class: "c-menu__item",
                    onclick: move |_| on_navigate.call(Destination::Changelog),
                    span { class: "c-menu__icon", "⚙️" }
                    "Changelog"
                }
            }
            li {
                button {
                    class: "c-menu__item",
                    onclick: move |_| on_logout.call(()),
                    span { class: "c-menu__icon", "⎋" }
                    "Logout"
                }
            }
        }
    }
}
