use dioxus::prelude::*;

/// Modal asking the user to confirm logout
#[component]
pub fn LogoutDialog(
    visible: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !visible {
        return rsx! {};
    }

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape {
            evt.prevent_default();
            on_cancel.call(());
        }
    };

    rsx! {
        div { class: "c-modal__overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "c-modal",
                role: "dialog",
                aria_modal: "true",
                tabindex: "0",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: handle_keydown,

                h2 { class: "c-modal__title", "Confirm Logout" }
                p { class: "c-modal__body", "Are you sure you want to log out?" }

                div { class: "c-modal__footer",
                    button {
                        class: "c-button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "c-button c-button--primary",
                        onclick: move |_| on_confirm.call(()),
                        "Logout"
                    }
                }
            }
        }
    }
}
