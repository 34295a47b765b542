//! Declarative navigation table for the client screens.
//!
//! The table is pure data built once at startup: route nodes mapping a path
//! to a screen, optionally nested under parent routes, with the
//! authenticated section wrapped in the main layout and a catch-all
//! fallback for everything unmatched. Matching is most-specific-first and
//! `is_active` uses prefix semantics on segment boundaries, mirroring how
//! the web client highlights its navigation entries.

use std::fmt;

/// Path the session redirects to on logout.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Library,
    Settings,
    NotFound,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Library => "Library",
            Screen::Settings => "Settings",
            Screen::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    path: &'static str,
    screen: Screen,
    children: Vec<Route>,
}

impl Route {
    pub fn view(path: &'static str, screen: Screen) -> Self {
        Self {
            path,
            screen,
            children: Vec::new(),
        }
    }

    pub fn with_children(path: &'static str, screen: Screen, children: Vec<Route>) -> Self {
        Self {
            path,
            screen,
            children,
        }
    }
}

/// Result of resolving a location against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub screen: Screen,
    pub in_layout: bool,
}

/// Static path-to-screen mapping. Built once, never mutated at runtime.
pub struct RouteTable {
    bare: Vec<Route>,
    layout: Vec<Route>,
    fallback: Screen,
}

impl RouteTable {
    pub fn new(bare: Vec<Route>, layout: Vec<Route>, fallback: Screen) -> Self {
        Self {
            bare,
            layout,
            fallback,
        }
    }

    /// Maps a location to its screen. Child routes win over their parents,
    /// unmatched locations land on the catch-all fallback.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize(path);

        if let Some(screen) = match_routes(&self.bare, &path) {
            return Resolution {
                screen,
                in_layout: false,
            };
        }
        if let Some(screen) = match_routes(&self.layout, &path) {
            return Resolution {
                screen,
                in_layout: true,
            };
        }

        Resolution {
            screen: self.fallback,
            in_layout: false,
        }
    }
}

fn match_routes(routes: &[Route], path: &str) -> Option<Screen> {
    for route in routes {
        // children first, the most specific pattern wins
        if let Some(screen) = match_routes(&route.children, path) {
            return Some(screen);
        }
        if normalize(route.path) == path {
            return Some(route.screen);
        }
    }
    None
}

/// Prefix-match on segment boundaries: `/library` is active at
/// `/library/albums` but not at `/libraryx`.
pub fn is_active(current: &str, prefix: &str) -> bool {
    let current = normalize(current);
    let prefix = normalize(prefix);

    if prefix == "/" {
        return current == "/";
    }
    current == prefix || current.starts_with(&format!("{}/", prefix))
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// The application's route table, mirroring the web client's screens.
pub fn table() -> RouteTable {
    RouteTable::new(
        vec![Route::view(LOGIN_PATH, Screen::Login)],
        vec![
            Route::view("/", Screen::Dashboard),
            Route::view("/dashboard", Screen::Dashboard),
            Route::with_children(
                "/library",
                Screen::Library,
                vec![
                    Route::view("/library/tracks", Screen::Library),
                    Route::view("/library/albums", Screen::Library),
                    Route::view("/library/artists", Screen::Library),
                    Route::view("/library/genres", Screen::Library),
                ],
            ),
            Route::view("/settings", Screen::Settings),
        ],
        Screen::NotFound,
    )
}

/// Current-location holder over a route table.
///
/// Navigation is plain state assignment; there is no history. The session's
/// logout lands on [`LOGIN_PATH`].
pub struct Nav {
    table: RouteTable,
    location: String,
}

impl Nav {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            location: "/".to_string(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        self.location = normalize(path);
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn resolve(&self) -> Resolution {
        self.table.resolve(&self.location)
    }

    pub fn is_active(&self, prefix: &str) -> bool {
        is_active(&self.location, prefix)
    }
}
