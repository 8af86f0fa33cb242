//! Routes and the error boundary payload

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::About];

    /// Accepts `/`, `/about` and their bare names
    pub fn parse(path: &str) -> Result<Self, PageError> {
        match path.trim().trim_matches('/').to_lowercase().as_str() {
            "" | "home" => Ok(Route::Home),
            "about" => Ok(Route::About),
            _ => Err(PageError::from_status(404, None)),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
        }
    }

    /// Scroll offset past which the nav bar switches style
    pub fn scroll_threshold(&self) -> f32 {
        match self {
            Route::Home => 10.0,
            Route::About => 15.0,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

const UNEXPECTED: &str = "An unexpected error occurred.";

/// What the error boundary shows instead of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError {
    pub status: Option<u16>,
    pub message: String,
    pub details: String,
}

impl PageError {
    pub fn from_status(status: u16, status_text: Option<&str>) -> Self {
        let (message, details) = if status == 404 {
            ("404", "The requested page could not be found.".to_string())
        } else {
            let details = status_text
                .filter(|s| !s.is_empty())
                .unwrap_or(UNEXPECTED)
                .to_string();
            ("Error", details)
        };

        Self {
            status: Some(status),
            message: message.to_string(),
            details,
        }
    }

    /// Internal failure. The underlying text is only shown in debug builds.
    pub fn unexpected(error: &dyn std::error::Error) -> Self {
        let details = if cfg!(debug_assertions) {
            error.to_string()
        } else {
            UNEXPECTED.to_string()
        };

        Self {
            status: None,
            message: "Oops!".to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Home));
        assert_eq!(Route::parse(""), Ok(Route::Home));
        assert_eq!(Route::parse("home"), Ok(Route::Home));
        assert_eq!(Route::parse("/about"), Ok(Route::About));
        assert_eq!(Route::parse("About/"), Ok(Route::About));
    }

    #[test]
    fn test_unknown_route_is_404() {
        let err = Route::parse("/settings").unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "404");
        assert_eq!(err.details, "The requested page could not be found.");
    }

    #[test]
    fn test_other_status_uses_status_text() {
        let err = PageError::from_status(500, Some("Internal Server Error"));
        assert_eq!(err.message, "Error");
        assert_eq!(err.details, "Internal Server Error");

        let err = PageError::from_status(503, Some(""));
        assert_eq!(err.details, "An unexpected error occurred.");
    }

    #[test]
    fn test_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tls backend unavailable");
        let err = PageError::unexpected(&io);
        assert_eq!(err.message, "Oops!");
        assert_eq!(err.status, None);
        if cfg!(debug_assertions) {
            assert_eq!(err.details, "tls backend unavailable");
        } else {
            assert_eq!(err.details, "An unexpected error occurred.");
        }
    }

    #[test]
    fn test_round_trip_paths() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Ok(route));
        }
    }

    #[test]
    fn test_scroll_thresholds() {
        assert_eq!(Route::Home.scroll_threshold(), 10.0);
        assert_eq!(Route::About.scroll_threshold(), 15.0);
    }
}
