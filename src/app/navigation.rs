//! Navigation - Route Table
//!
//! Declarative mapping from URL paths to console pages.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Pages the console can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    // User portal
    Overview,
    PersonalInfo,
    Security,
    Accounts,
    Sessions,
    ConsentManagement,
    // Admin portal
    EmailTemplateTypes,
    IdentityProviders,
    /// Fallback for unknown paths
    NotFound,
}

/// A single route entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub icon: Option<&'static str>,
    pub name: &'static str,
    /// `None` only for the fallback route
    pub path: Option<&'static str>,
    /// Requires an authenticated session
    pub protected: bool,
    pub show_on_side_panel: bool,
}

impl Route {
    const fn new(
        page: Page,
        icon: &'static str,
        name: &'static str,
        path: &'static str,
        show_on_side_panel: bool,
    ) -> Self {
        Self {
            page,
            icon: Some(icon),
            name,
            path: Some(path),
            protected: true,
            show_on_side_panel,
        }
    }

    const fn not_found() -> Self {
        Self {
            page: Page::NotFound,
            icon: None,
            name: "404",
            path: None,
            protected: true,
            show_on_side_panel: false,
        }
    }
}

const USER_PORTAL_ROUTES: &[Route] = &[
    Route::new(Page::Overview, "overview", "Overview", "/overview", true),
    Route::new(Page::PersonalInfo, "personal", "Personal Info", "/personal-info", true),
    Route::new(Page::Security, "security", "Security", "/security", true),
    Route::new(Page::Accounts, "account", "Accounts", "/accounts", false),
    Route::new(Page::Sessions, "session", "Sessions", "/sessions", false),
    Route::new(
        Page::ConsentManagement,
        "consent",
        "Consent Management",
        "/consent-management",
        false,
    ),
    Route::not_found(),
];

const ADMIN_PORTAL_ROUTES: &[Route] = &[
    Route::new(
        Page::EmailTemplateTypes,
        "email",
        "Email Templates",
        "/email-templates",
        true,
    ),
    Route::new(
        Page::IdentityProviders,
        "identity-providers",
        "Identity Providers",
        "/identity-providers",
        true,
    ),
    Route::not_found(),
];

/// Ordered route list with a path index and a fallback
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: &'static [Route],
    by_path: AHashMap<&'static str, usize>,
    fallback: usize,
}

impl RouteTable {
    fn from_routes(routes: &'static [Route]) -> Self {
        let by_path = routes
            .iter()
            .enumerate()
            .filter_map(|(i, route)| route.path.map(|path| (path, i)))
            .collect();
        let fallback = routes
            .iter()
            .position(|route| route.path.is_none())
            .unwrap_or(routes.len().saturating_sub(1));
        Self {
            routes,
            by_path,
            fallback,
        }
    }

    pub fn user_portal() -> Self {
        Self::from_routes(USER_PORTAL_ROUTES)
    }

    pub fn admin_portal() -> Self {
        Self::from_routes(ADMIN_PORTAL_ROUTES)
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[Route] {
        self.routes
    }

    /// Exact path match, ignoring a trailing slash; unknown paths get the fallback
    pub fn resolve(&self, path: &str) -> &Route {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let index = self.by_path.get(trimmed).copied().unwrap_or(self.fallback);
        &self.routes[index]
    }

    /// Routes shown in the side panel, in declaration order
    pub fn side_panel(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|route| route.show_on_side_panel)
    }

    /// First route with a path (the landing page)
    pub fn default_route(&self) -> &Route {
        self.routes
            .iter()
            .find(|route| route.path.is_some())
            .unwrap_or(&self.routes[self.fallback])
    }
}
