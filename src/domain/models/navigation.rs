/// Every place the shell itself can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    NodeDetail,
    VarTrack,
    Profile,
    Changelog,
    Login,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/admin/dashboard",
            Destination::NodeDetail => "/admin/nodedetail",
            Destination::VarTrack => "/admin/vartrack",
            Destination::Profile => "/admin/profile",
            Destination::Changelog => "/admin/changelog",
            Destination::Login => "/login",
        }
    }
}

/// One sidebar menu row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub destination: Destination,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavEntry {
    pub fn path(&self) -> &'static str {
        self.destination.path()
    }

    /// Highlighted when the current path is this entry or below it
    pub fn is_active(&self, current_path: &str) -> bool {
        let path = self.path();
        current_path == path
            || current_path
                .strip_prefix(path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const SIDEBAR_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        destination: Destination::Dashboard,
        label: "Dashboard",
        icon: "📊",
    },
    NavEntry {
        destination: Destination::NodeDetail,
        label: "Node Details",
        icon: "🖥️",
    },
    NavEntry {
        destination: Destination::VarTrack,
        label: "VarTrack",
        icon: "👤",
    },
];

/// One breadcrumb segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Derive the trail for a path: one crumb per non-empty segment, each
/// targeting the path prefix that ends with it.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| Crumb {
            label: capitalize_first(segment),
            href: format!("/{}", segments[..=index].join("/")),
        })
        .collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
