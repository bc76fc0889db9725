use dioxus::prelude::*;

use crate::app::pages::Route;
use crate::domain::models::breadcrumbs;

/// Crumb labels paired with the route their prefix resolves to
fn crumb_links(path: &str) -> Vec<(String, Option<Route>)> {
    breadcrumbs(path)
        .into_iter()
        .map(|crumb| {
            let target = crumb.href.parse::<Route>().ok();
            (crumb.label, target)
        })
        .collect()
}

/// Breadcrumb strip derived from the current path
#[component]
pub fn Breadcrumbs(path: String) -> Element {
    let items = crumb_links(&path);
    let last = items.len().saturating_sub(1);

    rsx! {
        nav { class: "c-breadcrumbs", aria_label: "Breadcrumb",
            for (index, (label, target)) in items.into_iter().enumerate() {
                if index > 0 {
                    span { class: "c-breadcrumbs__separator", "/" }
                }
                if let Some(route) = target {
                    Link {
                        class: if index == last { "c-breadcrumbs__link c-breadcrumbs__link--current" } else { "c-breadcrumbs__link" },
                        to: route,
                        "{label}"
                    }
                } else {
                    span { class: "c-breadcrumbs__current", "{label}" }
                }
            }
        }
    }
}
