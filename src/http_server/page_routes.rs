//! Page Routes
//!
//! The browser front end: one HTML page and its script, compiled into the
//! binary.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");

/// Create page routes
pub fn page_routes() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/static/app.js", get(app_js_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn app_js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}
