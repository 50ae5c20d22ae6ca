/// The client-side route surface. Pure navigation — there is no
/// server-side routing contract behind these paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search { query: String },
    Fund { scheme_code: String },
    Login,
    Register,
    SavedFunds,
    Profile,
}

impl Route {
    /// Parse a path (with optional `?q=` query) into a route.
    /// Returns `None` for anything outside the known surface.
    #[must_use]
    pub fn parse(path: &str) -> Option<Route> {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        match path {
            "/" => Some(Route::Home),
            "/search" => {
                let query = query
                    .and_then(|q| q.strip_prefix("q="))
                    .unwrap_or_default()
                    .to_string();
                Some(Route::Search { query })
            }
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/saved-funds" => Some(Route::SavedFunds),
            "/profile" => Some(Route::Profile),
            _ => path
                .strip_prefix("/fund/")
                .filter(|code| !code.is_empty() && !code.contains('/'))
                .map(|code| Route::Fund {
                    scheme_code: code.to_string(),
                }),
        }
    }

    /// Format the route back into its path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search { query } => format!("/search?q={query}"),
            Route::Fund { scheme_code } => format!("/fund/{scheme_code}"),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::SavedFunds => "/saved-funds".to_string(),
            Route::Profile => "/profile".to_string(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
