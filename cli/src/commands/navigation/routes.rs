//! # Navigation HTTP Routes
//!
//! File: cli/src/commands/navigation/routes.rs
//!
//! ## Overview
//!
//! - `GET /`                  → the map page (HTML)
//! - `GET /status`            → `{"status": "running", "service": "navigation"}`
//! - `GET /directions?to=KEY` → `{"destination": KEY, "route": [...]}`
//! - `GET /static/*`          → files from the configured static directory
//!
use super::directions::{ISLAND_ROUTES, UNKNOWN_DESTINATION};
use super::page;
use super::SERVICE_NAME;
use crate::common::server::{status_response, ServiceStatus};
use crate::core::error::Result;
use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use tower_http::services::ServeDir;
use tracing::debug;

/// Query parameters of `/directions`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub to: Option<String>,
}

impl DirectionsQuery {
    /// Picks `to` out of the raw query pairs. When it repeats, the first one wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let to = pairs
            .into_iter()
            .find(|(key, _)| key == "to")
            .map(|(_, value)| value);
        Self { to }
    }
}

/// `/directions` response. `destination` echoes the request as given.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Directions {
    pub destination: String,
    pub route: &'static [&'static str],
}

impl Directions {
    /// Looks up the route for `destination`, keeping its spelling for the response.
    pub fn to(destination: String) -> Self {
        let route = ISLAND_ROUTES.route_to(&destination);
        Self { destination, route }
    }
}

/// Builds the navigation router (without middleware), serving assets from `static_dir`.
///
/// The map page is rendered here, once, and served as-is afterwards.
pub fn create_app(static_dir: &Path) -> Result<Router> {
    let home = Html(page::render_page()?);
    Ok(Router::new()
        .route("/", get(move || std::future::ready(home.clone())))
        .route("/status", get(status))
        .route("/directions", get(directions))
        .nest_service("/static", ServeDir::new(static_dir)))
}

async fn status() -> Json<ServiceStatus> {
    status_response(SERVICE_NAME)
}

async fn directions(
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Directions> {
    let to = match query {
        Ok(Query(pairs)) => DirectionsQuery::from_pairs(pairs).to,
        Err(rejection) => {
            debug!("Ignoring undecodable directions query: {}", rejection);
            None
        }
    };
    let destination = to.unwrap_or_else(|| UNKNOWN_DESTINATION.to_string());
    Json(Directions::to(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body, Bytes},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn get_raw(app: Router, uri: &str) -> (StatusCode, Option<String>, Bytes) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body)
    }

    fn app(static_dir: &Path) -> Router {
        create_app(static_dir).unwrap()
    }

    async fn get_json(uri: &str) -> Value {
        let temp_dir = TempDir::new().unwrap();
        let (status, _, body) = get_raw(app(temp_dir.path()), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_directions_maze_scenario() {
        assert_eq!(
            get_json("/directions?to=maze").await,
            json!({
                "destination": "maze",
                "route": ["Enter forest", "Turn left at ruins", "Arrive at Maze Garden!"]
            })
        );
    }

    #[tokio::test]
    async fn test_directions_case_insensitive_keeps_original_case() {
        let upper = get_json("/directions?to=VOLCANO").await;
        let lower = get_json("/directions?to=volcano").await;

        assert_eq!(upper["route"], lower["route"]);
        assert_eq!(upper["destination"], "VOLCANO");
        assert_eq!(lower["destination"], "volcano");
        assert_eq!(upper["route"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_directions_unknown_destination() {
        for (uri, destination) in [
            ("/directions?to=castle", "castle"),
            ("/directions?to=", ""),
            ("/directions?to=Volcano%20Ride", "Volcano Ride"),
        ] {
            assert_eq!(
                get_json(uri).await,
                json!({"destination": destination, "route": ["Destination unknown"]}),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_directions_missing_to_defaults_to_unknown() {
        for uri in ["/directions", "/directions?from=boat"] {
            assert_eq!(
                get_json(uri).await,
                json!({"destination": "unknown", "route": ["Destination unknown"]}),
                "{uri}"
            );
        }
    }

    #[test]
    fn test_query_first_to_wins() {
        let query = DirectionsQuery::from_pairs(vec![
            ("from".into(), "gate".into()),
            ("to".into(), "boat".into()),
            ("to".into(), "maze".into()),
        ]);
        assert_eq!(query.to.as_deref(), Some("boat"));
        assert_eq!(DirectionsQuery::from_pairs(Vec::new()), DirectionsQuery::default());
    }

    #[tokio::test]
    async fn test_directions_repeated_to_uses_first() {
        assert_eq!(
            get_json("/directions?to=boat&to=maze").await,
            json!({
                "destination": "boat",
                "route": ["Go south", "Cross stone bridge", "Dock at Pirate Ship Ride!"]
            })
        );
    }

    #[tokio::test]
    async fn test_status() {
        assert_eq!(
            get_json("/status").await,
            json!({"status": "running", "service": "navigation"})
        );
    }

    #[tokio::test]
    async fn test_home_serves_html() {
        let temp_dir = TempDir::new().unwrap();
        let (status, content_type, body) = get_raw(app(temp_dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Welcome to Mystery Island"));
        assert!(html.contains("getDirections('resort')"));
    }

    #[tokio::test]
    async fn test_static_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("legend.txt"), "X marks the spot").unwrap();

        let (status, _, body) =
            get_raw(app(temp_dir.path()), "/static/legend.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"X marks the spot");

        let (status, _, _) = get_raw(app(temp_dir.path()), "/static/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_dir_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let (status, _, _) = get_raw(app(&missing), "/static/map.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let (status, _, _) = get_raw(app(temp_dir.path()), "/chat").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
