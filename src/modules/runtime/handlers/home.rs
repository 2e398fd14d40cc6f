//! Route listing served at `/`

use axum::response::Html;

/// Data routes, in the order they are listed
pub const ROUTES: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/tobs_with_stations",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// Handler for the index page
pub struct HomeHandler;

impl HomeHandler {
    /// Handle GET /
    pub async fn handle() -> Html<String> {
        Html(Self::listing())
    }

    /// `<br/>`-separated route listing with the path placeholders entity-escaped
    pub fn listing() -> String {
        let mut text = String::from("Available Routes:<br/>");
        for route in ROUTES {
            text.push_str(&route.replace('<', "&lt;").replace('>', "&gt;"));
            text.push_str("<br/>");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing() {
        let text = HomeHandler::listing();
        assert!(text.starts_with("Available Routes:<br/>/api/v1.0/precipitation<br/>"));
        assert!(text.ends_with("/api/v1.0/&lt;start&gt;/&lt;end&gt;<br/>"));
        assert_eq!(text.matches("<br/>").count(), ROUTES.len() + 1);
    }
}
