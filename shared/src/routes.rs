//! Client-side routing table.

/// Every page the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Dashboard,
    Sale,
    Withdrawal,
    Kyc,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Landing,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Sale,
        Route::Withdrawal,
        Route::Kyc,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/auth/login",
            Route::Register => "/auth/register",
            Route::Dashboard => "/dashboard",
            Route::Sale => "/dashboard/sale",
            Route::Withdrawal => "/dashboard/withdrawal",
            Route::Kyc => "/dashboard/kyc",
        }
    }

    /// Resolve a location path. Unknown paths land on [`Route::Landing`].
    ///
    /// Query strings, fragments and a trailing `/` are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::Landing)
    }
}

/// Reports are linked from the dashboard but not built yet; following the link lands on the
/// landing page through the fallback route.
pub const REPORTS_PATH: &str = "/dashboard/reports";

/// Password recovery has no page yet; like [`REPORTS_PATH`] it resolves to the landing page.
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back_to_landing() {
        assert_eq!(Route::from_path("/nope"), Route::Landing);
        assert_eq!(Route::from_path(REPORTS_PATH), Route::Landing);
        assert_eq!(Route::from_path(FORGOT_PASSWORD_PATH), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
    }

    #[test]
    fn test_query_and_trailing_slash_ignored() {
        assert_eq!(Route::from_path("/dashboard/?tab=1"), Route::Dashboard);
        assert_eq!(Route::from_path("/auth/login#form"), Route::Login);
    }
}
