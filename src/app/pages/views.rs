//! Views rendered in the shell's content slot. Their real content is owned
//! by other screens; these keep the routes navigable.

use dioxus::prelude::*;

use crate::app::pages::routes::Route;

#[component]
fn Placeholder(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__subtitle", "{subtitle}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Placeholder { title: "Dashboard", subtitle: "Cluster overview" } }
}

#[component]
pub fn NodeDetail() -> Element {
    rsx! { Placeholder { title: "Node Details", subtitle: "Per-node status and metrics" } }
}

#[component]
pub fn VarTrack() -> Element {
    rsx! { Placeholder { title: "VarTrack", subtitle: "Tracked variables" } }
}

#[component]
pub fn Profile() -> Element {
    rsx! { Placeholder { title: "Profile", subtitle: "Account details" } }
}

#[component]
pub fn Changelog() -> Element {
    rsx! { Placeholder { title: "Changelog", subtitle: "Release notes" } }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "c-login",
            div { class: "c-login__card",
                h1 { class: "c-login__title", "Signed out" }
                p { class: "c-login__text", "Your session has ended." }
                Link { class: "c-login__link", to: Route::Dashboard {}, "Back to dashboard" }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "c-login",
            div { class: "c-login__card",
                h1 { class: "c-login__title", "Page not found" }
                p { class: "c-login__text", "Nothing lives at {path}." }
                Link { class: "c-login__link", to: Route::Dashboard {}, "Go to dashboard" }
            }
        }
    }
}
