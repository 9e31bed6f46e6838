//! Route table of the dashboard.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Inventory,
    Maintenance,
    Reports,
    Settings,
    Login,
    Register,
}

impl Route {
    pub const ALL: &'static [Route] = &[
        Route::Dashboard,
        Route::Inventory,
        Route::Maintenance,
        Route::Reports,
        Route::Settings,
        Route::Login,
        Route::Register,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Inventory => "/inventory",
            Route::Maintenance => "/maintenance",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Inventory => "Inventory",
            Route::Maintenance => "Maintenance",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
            Route::Login => "Sign in",
            Route::Register => "Create account",
        }
    }

    /// Whether the route needs a signed-in user.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    /// Exact path match; trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    /// Route actually shown for `path`.
    ///
    /// Unknown paths land on the dashboard. Protected routes send anonymous
    /// visitors to the login page.
    pub fn resolve(path: &str, authenticated: bool) -> Route {
        let route = Route::from_path(path).unwrap_or(Route::Dashboard);
        if route.is_protected() && !authenticated {
            Route::Login
        } else {
            route
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes_redirect_to_login() {
        for route in Route::ALL.iter().filter(|r| r.is_protected()) {
            assert_eq!(Route::resolve(route.path(), false), Route::Login);
            assert_eq!(Route::resolve(route.path(), true), *route);
        }
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(Route::resolve("/login", false), Route::Login);
        assert_eq!(Route::resolve("/register", false), Route::Register);
        assert_eq!(Route::resolve("/register", true), Route::Register);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::resolve("/nope", true), Route::Dashboard);
        assert_eq!(Route::resolve("/nope", false), Route::Login);
        assert_eq!(Route::resolve("", true), Route::Dashboard);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Dashboard.title(), "Dashboard");
        assert_eq!(Route::resolve("/reports", false).title(), "Sign in");
        assert_eq!(Route::Register.title(), "Create account");
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::from_path("/inventory/"), Some(Route::Inventory));
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::Reports.to_string(), "/reports");
    }
}
