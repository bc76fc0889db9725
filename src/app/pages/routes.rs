use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::DashboardShell;
use crate::app::pages::views::{Changelog, Dashboard, Login, NodeDetail, NotFound, Profile, VarTrack};
use crate::config::DashboardConfig;
use crate::domain::models::Destination;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[nest("/admin")]
        #[layout(DashboardShell)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/nodedetail")]
            NodeDetail {},
            #[route("/vartrack")]
            VarTrack {},
            #[route("/profile")]
            Profile {},
            #[route("/changelog")]
            Changelog {},
        #[end_layout]
    #[end_nest]

    #[redirect("/", || Route::Dashboard {})]
    #[redirect("/admin", || Route::Dashboard {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Route::Dashboard {},
            Destination::NodeDetail => Route::NodeDetail {},
            Destination::VarTrack => Route::VarTrack {},
            Destination::Profile => Route::Profile {},
            Destination::Changelog => Route::Changelog {},
            Destination::Login => Route::Login {},
        }
    }
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_context_provider(DashboardConfig::from_env);

    use_effect(|| {
        tracing::info!("Admin dashboard shell initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_render_to_their_paths() {
        for destination in [
            Destination::Dashboard,
            Destination::NodeDetail,
            Destination::VarTrack,
            Destination::Profile,
            Destination::Changelog,
            Destination::Login,
        ] {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_known_paths_parse() {
        let route = "/admin/nodedetail".parse::<Route>().ok();
        assert_eq!(route, Some(Route::NodeDetail {}));
    }
}
