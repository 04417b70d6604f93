//! Client-side route table.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Tutor,
    Goals,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Tutor, Route::Goals];

    /// Routes linked from the top navigation bar.
    pub const NAV: [Route; 2] = [Route::Dashboard, Route::Tutor];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Tutor => "/tutor",
            Route::Goals => "/goals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Tutor => "AI Tutor",
            Route::Goals => "Goal Details",
        }
    }

    /// Map a location path to its route. Unknown paths land on the dashboard.
    pub fn resolve(path: &str) -> Route {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or_default()
    }

    /// Whether a nav link to this route should be highlighted for `pathname`.
    /// Exact match only, so a path about to be redirected highlights nothing.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path() == pathname
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
