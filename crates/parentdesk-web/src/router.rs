//! Web router using Axum

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use parentdesk_types::NavMenu;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::shell;

/// Landing route for `/` and `/parent`
pub const DEFAULT_ROUTE: &str = "/parent/dashboard";

/// Prefix reserved for JSON endpoints
pub const API_PREFIX: &str = "/api";

/// Create the web router
pub fn create_router(menu: NavMenu) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/nav", get(nav_handler))
        .fallback(page_handler)
        .layer(cors)
        .with_state(Arc::new(menu))
}

#[derive(Debug, Deserialize)]
struct NavQuery {
    current: Option<String>,
}

async fn health_handler(State(menu): State<Arc<NavMenu>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "nav_items": menu.len(),
    }))
}

/// Menu in declared order with the active flag resolved against `current`
async fn nav_handler(
    State(menu): State<Arc<NavMenu>>,
    Query(query): Query<NavQuery>,
) -> Response {
    let current = query.current.unwrap_or_default();
    Json(menu.links(&current)).into_response()
}

/// Server-rendered shell for any non-API path; unknown API paths get a JSON 404
async fn page_handler(State(menu): State<Arc<NavMenu>>, uri: Uri) -> Response {
    let path = uri.path();

    if is_api_path(path) {
        debug!(path, "Unknown API endpoint");
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Not found", "path": path })),
        )
            .into_response();
    }

    if path == "/" || path == "/parent" {
        return Redirect::temporary(DEFAULT_ROUTE).into_response();
    }

    let status = if menu.contains(path) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    debug!(path, status = status.as_u16(), "Rendering parent shell");

    (status, Html(shell::render_shell(&menu, path))).into_response()
}

fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/unknown"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/parent/api"));
    }
}
