//! Top-level views reachable from the navigation bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Simulation,
    Learn,
    NotFound,
}

impl Route {
    /// Entries shown in the navigation bar, in order.
    pub const NAV: [Route; 3] = [Route::Landing, Route::Simulation, Route::Learn];

    /// Resolve a path; anything unknown is [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/simulation" => Route::Simulation,
            "/learn" => Route::Learn,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Simulation => "/simulation",
            Route::Learn => "/learn",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Simulation => "Simulation",
            Route::Learn => "Learn",
            Route::NotFound => "Not Found",
        }
    }

    /// Number of backdrop stars behind the page.
    pub fn backdrop_stars(self) -> usize {
        match self {
            Route::Simulation => 500,
            Route::Learn => 300,
            Route::Landing | Route::NotFound => 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        for r in Route::NAV {
            assert_eq!(Route::from_path(r.path()), r);
        }
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Route::from_path("/learn/"), Route::Learn);
        assert_eq!(Route::from_path("/simulation?x=1"), Route::Simulation);
        assert_eq!(Route::from_path(""), Route::Landing);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/mars"), Route::NotFound);
        assert_eq!(Route::from_path("learn"), Route::NotFound);
    }
}
