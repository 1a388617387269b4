//! Shared API plumbing: error body, health endpoint and CORS policy

use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::core::config::Config;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// Pair the body with its status code
    pub fn respond(status: StatusCode, error: impl Into<String>, code: &str) -> axum::response::Response {
        (status, Json(Self::new(error, code))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct Health {
    ok: bool,
}

/// GET /health
pub fn health_router() -> Router {
    Router::new().route("/health", get(|| async { Json(Health { ok: true }) }))
}

/// CORS for the public API; `*` allows any origin, unparsable origins are skipped
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn config_with_origins(origins: &[&str]) -> Config {
        Config {
            database_url: None,
            turnstile_secret_key: None,
            turnstile_bypass: false,
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = health_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }

    #[test]
    fn test_api_error_serialization() {
        let json = serde_json::to_string(&ApiError::new("Barrio inválido", "INVALID_NEIGHBORHOOD"))
            .unwrap();
        assert_eq!(json, r#"{"error":"Barrio inválido","code":"INVALID_NEIGHBORHOOD"}"#);
    }

    #[tokio::test]
    async fn test_cors_allows_listed_origin_only() {
        let app = health_router().layer(cors_layer(&config_with_origins(&["https://oxigeno.co"])));

        let allowed = app
            .clone()
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://oxigeno.co")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://oxigeno.co"
        );

        let other = app
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(other.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_cors_wildcard() {
        let response = health_router()
            .layer(cors_layer(&config_with_origins(&["https://oxigeno.co", "*"])))
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
