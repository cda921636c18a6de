//! Dashboard Route
//!
//! - GET / - Single-page dashboard: feedback box, result line, bar chart, summary

use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

/// GET /
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
