#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Forecast,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/app" => Route::Forecast,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing | Route::NotFound => "/",
            Route::Forecast => "/app",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/app"), Route::Forecast);
        assert_eq!(Route::from_path("/app/"), Route::Forecast);
        assert_eq!(Route::from_path("/apps"), Route::NotFound);
        assert_eq!(Route::from_path("/app/extra"), Route::NotFound);
    }

    #[test]
    fn paths_parse_back() {
        for route in [Route::Landing, Route::Forecast] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
