//! HTTP and WebSocket layer serving the dashboards.
//!
//! This crate provides:
//! - REST routes returning page models
//! - Live WebSocket sessions driving chart rotation
//! - JSON error responses

pub mod error;
pub mod live;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use venturehub_core::dashboard::{AvatarSource, MetricsProvider};
use venturehub_shared::DashboardConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of dashboard metrics.
    pub provider: Arc<dyn MetricsProvider>,
    /// Dashboard settings.
    pub dashboard: Arc<DashboardConfig>,
}

impl AppState {
    /// Creates the state.
    pub fn new(provider: Arc<dyn MetricsProvider>, dashboard: DashboardConfig) -> Self {
        Self {
            provider,
            dashboard: Arc::new(dashboard),
        }
    }

    /// Avatar generator for founder rosters.
    #[must_use]
    pub fn avatars(&self) -> AvatarSource {
        AvatarSource::new(self.dashboard.avatar_base_url.clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use venturehub_core::dashboard::DemoProvider;
    use venturehub_shared::DashboardConfig;

    use super::{AppState, create_router};

    /// Router over the demo data with default settings.
    pub fn app() -> Router {
        app_with(DemoProvider::new())
    }

    /// Router over `provider`.
    pub fn app_with(provider: DemoProvider) -> Router {
        create_router(AppState::new(Arc::new(provider), DashboardConfig::default()))
    }

    /// Sends `request` and decodes the JSON body.
    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    /// GET `uri`.
    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }
}
