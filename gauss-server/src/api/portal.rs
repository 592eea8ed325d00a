//! Portal page handler

use axum::response::{Html, IntoResponse};

/// GET / - the dashboard page, embedded at compile time
pub async fn index() -> impl IntoResponse {
    let html = include_str!("../../static/index.html");
    Html(html)
}
