//! Route table and responsive navigation of the admin shell.

use common::ResourceKind;
use common::config::ShellConfig;
use tracing::debug;

/// A named navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: ResourceKind,
}

pub const ROUTES: &[Route] = &[
    Route {
        name: "Banners",
        path: "/admin/banners",
        kind: ResourceKind::Banner,
    },
    Route {
        name: "Services",
        path: "/admin/services",
        kind: ResourceKind::Service,
    },
    Route {
        name: "Blogs",
        path: "/admin/blogs",
        kind: ResourceKind::Blog,
    },
];

/// What the shell's content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlet {
    View(ResourceKind),
    NotFound,
}

impl Outlet {
    pub fn route(&self) -> Option<&'static Route> {
        match self {
            Self::View(kind) => ROUTES.iter().find(|r| r.kind == *kind),
            Self::NotFound => None,
        }
    }
}

/// Resolve a path. The root and `/admin` are the index route (Banners).
pub fn resolve(path: &str) -> Outlet {
    let trimmed = path.trim();
    let normalized = match trimmed.trim_end_matches('/') {
        "" if trimmed.starts_with('/') => "/",
        other => other,
    };

    match normalized {
        "/" | "/admin" => Outlet::View(ResourceKind::Banner),
        other => ROUTES
            .iter()
            .find(|r| r.path == other)
            .map_or(Outlet::NotFound, |r| Outlet::View(r.kind)),
    }
}

/// One rendered nav entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: &'static Route,
    pub active: bool,
}

/// Navigation state: current route, viewport width and the collapsed menu.
#[derive(Debug, Clone)]
pub struct Navigation {
    outlet: Outlet,
    width: u16,
    collapse_below: u16,
    menu_open: bool,
}

impl Navigation {
    pub fn new(config: &ShellConfig, width: u16) -> Self {
        Self {
            outlet: resolve("/"),
            width,
            collapse_below: config.collapse_below,
            menu_open: false,
        }
    }

    pub fn outlet(&self) -> Outlet {
        self.outlet
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Narrow viewport: the nav sits behind the menu toggle.
    pub fn is_collapsed(&self) -> bool {
        self.width < self.collapse_below
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the nav entries are visible right now.
    pub fn nav_visible(&self) -> bool {
        !self.is_collapsed() || self.menu_open
    }

    pub fn items(&self) -> Vec<NavItem> {
        let active = self.outlet.route();
        ROUTES
            .iter()
            .map(|route| NavItem {
                route,
                active: active.is_some_and(|a| a.path == route.path),
            })
            .collect()
    }

    /// Go to `path`. On a narrow viewport the menu closes afterwards.
    pub fn navigate(&mut self, path: &str) -> Outlet {
        self.outlet = resolve(path);
        if self.is_collapsed() {
            self.menu_open = false;
        }
        debug!(path, outlet = ?self.outlet, "Navigated");
        self.outlet
    }

    pub fn toggle_menu(&mut self) {
        if self.is_collapsed() {
            self.menu_open = !self.menu_open;
        }
    }

    /// Track a new viewport width. Growing past the threshold closes the menu.
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        if !self.is_collapsed() {
            self.menu_open = false;
        }
    }
}
