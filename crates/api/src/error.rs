//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};
use venturehub_core::dashboard::ViewError;
use venturehub_shared::AppError;

/// Application error rendered as `{ "error", "message" }` JSON.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(error = %self.0, "request rejected");
        }
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

/// Handler result.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_validation_error_body() {
        let response = ApiError::from(ViewError::UnknownChart("pie".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Validation error: Unknown chart: pie");
    }

    #[test]
    fn test_external_service_maps_to_bad_gateway() {
        let response =
            ApiError(AppError::ExternalService("snapshot unreadable".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
