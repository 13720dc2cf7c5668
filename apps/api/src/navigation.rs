use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

pub const ADMIN_ROOT: &str = "/admin";

struct NavItem {
    label: &'static str,
    short_label: &'static str,
    path: &'static str,
    /// Only an exact path match activates the item.
    end: bool,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Inicio", short_label: "Inicio", path: ADMIN_ROOT, end: true },
    NavItem { label: "Pacientes", short_label: "Pacientes", path: "/admin/patients", end: false },
    NavItem { label: "Horarios", short_label: "Horarios", path: "/admin/schedule", end: false },
    NavItem { label: "Configuración", short_label: "Config", path: "/admin/settings", end: false },
];

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: String,
    pub short_label: String,
    pub path: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub path: String,
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationQuery {
    pub path: Option<String>,
}

fn is_active(item: &NavItem, path: &str) -> bool {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    if item.end {
        return path == item.path;
    }
    path == item.path
        || path
            .strip_prefix(item.path)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn navigation_for(path: &str) -> Navigation {
    Navigation {
        path: path.to_string(),
        items: NAV_ITEMS
            .iter()
            .map(|item| NavLink {
                label: item.label.to_string(),
                short_label: item.short_label.to_string(),
                path: item.path.to_string(),
                active: is_active(item, path),
            })
            .collect(),
    }
}

/// Sidebar and bottom-bar entries with the current one highlighted.
pub async fn get_navigation(Query(query): Query<NavigationQuery>) -> Json<Navigation> {
    let path = query.path.unwrap_or_else(|| ADMIN_ROOT.to_string());
    Json(navigation_for(&path))
}
