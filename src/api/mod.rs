//! Feedback Pulse REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Embedded dashboard page
//!
//! ## Feedback
//! - `POST /api/v1/feedback` - Classify and tally feedback
//! - `GET /api/v1/view` - Current chart dataset and summary
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - View refresh stream
//!
//! # Example
//!
//! ```rust,no_run
//! use feedback_pulse::api::{serve, AppState};
//! use feedback_pulse::classifier::HttpClassifier;
//! use feedback_pulse::config::Config;
//! use feedback_pulse::tally::FeedbackTally;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let classifier = Arc::new(HttpClassifier::new(config.classifier.clone())?);
//!     let tally = Arc::new(FeedbackTally::new(classifier));
//!
//!     serve(AppState::new(tally), &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/feedback", post(routes::feedback::submit_feedback))
        .route("/view", get(routes::feedback::get_view));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Feedback Pulse listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Feedback Pulse shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::fake::{Reply, ScriptedClassifier};
    use crate::tally::FeedbackTally;
    use crate::view::WELCOME_MESSAGE;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app(replies: Vec<Reply>) -> (Router, Arc<FeedbackTally>, Arc<ScriptedClassifier>) {
        let classifier = Arc::new(ScriptedClassifier::new(replies));
        let tally = Arc::new(FeedbackTally::new(classifier.clone()));
        let router = build_router(AppState::new(Arc::clone(&tally)));
        (router, tally, classifier)
    }

    fn post_feedback(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/feedback")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _, _) = create_test_app(vec![]);

        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _, _) = create_test_app(vec![]);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["total"], 0);
    }

    #[tokio::test]
    async fn test_dashboard_served() {
        let (app, _, _) = create_test_app(vec![]);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8_lossy(&bytes);
        assert!(page.contains("sentimentChart"));
        // Out-of-order views must not step the chart back
        assert!(page.contains("view.tally.total < shownTotal"));
    }

    #[tokio::test]
    async fn test_initial_view() {
        let (app, _, _) = create_test_app(vec![]);

        let response = app
            .oneshot(Request::builder().uri("/api/v1/view").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["chart"]["data"], serde_json::json!([0, 0, 0]));
        assert_eq!(json["summary"], WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_positive() {
        let (app, tally, _) = create_test_app(vec![Reply::Label("positive")]);

        let response = app
            .oneshot(post_feedback(r#"{"feedback": "great product"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["tallied"], true);
        assert_eq!(json["message"], "Predicted Sentiment: positive");
        assert_eq!(json["view"]["chart"]["data"], serde_json::json!([1, 0, 0]));
        assert_eq!(
            json["view"]["summary"],
            "Total feedback analyzed: 1. Overall sentiment is mostly positive 🚀."
        );
        assert_eq!(tally.snapshot().await.positive, 1);
    }

    #[tokio::test]
    async fn test_submit_unknown_label() {
        let (app, tally, _) = create_test_app(vec![Reply::Label("sarcastic")]);

        let response = app
            .oneshot(post_feedback(r#"{"feedback": "sure, great"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["sentiment"], "Unknown");
        assert_eq!(json["tallied"], false);
        assert_eq!(json["color"], "#b22222");
        assert_eq!(tally.snapshot().await.total(), 0);
    }

    #[tokio::test]
    async fn test_submit_empty_is_rejected_without_call() {
        let (app, tally, classifier) = create_test_app(vec![Reply::Label("positive")]);

        let response = app.oneshot(post_feedback(r#"{"feedback": "   "}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Please enter feedback before submitting."
        );
        assert_eq!(classifier.calls(), 0);
        assert_eq!(tally.snapshot().await.total(), 0);
    }

    #[tokio::test]
    async fn test_submit_missing_field_is_empty() {
        let (app, _, classifier) = create_test_app(vec![]);

        let response = app.oneshot(post_feedback("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(classifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_classifier_failure() {
        let (app, tally, _) = create_test_app(vec![Reply::Fail]);

        let response = app
            .oneshot(post_feedback(r#"{"feedback": "hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "CLASSIFICATION_ERROR");
        assert_eq!(json["error"]["message"], "Error analyzing sentiment. Try again.");
        assert_eq!(tally.snapshot().await.chart_data(), [0, 0, 0]);
    }

    #[tokio::test]
    async fn test_submit_invalid_json() {
        let (app, _, _) = create_test_app(vec![]);

        let response = app.oneshot(post_feedback("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_submit_wrong_field_type() {
        let (app, tally, classifier) = create_test_app(vec![Reply::Label("positive")]);

        let response = app
            .oneshot(post_feedback(r#"{"feedback": 5}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"].as_str().is_some());
        assert_eq!(classifier.calls(), 0);
        assert_eq!(tally.snapshot().await.total(), 0);
    }

    #[tokio::test]
    async fn test_submit_without_json_content_type() {
        let (app, _, _) = create_test_app(vec![]);

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/feedback")
            .body(Body::from(r#"{"feedback": "hi"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }
}
