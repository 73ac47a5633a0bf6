//! Error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use finbot_core::budget::{BudgetError, ComputationError, ValidationError};
use finbot_shared::AppError;
use serde_json::json;
use tracing::warn;

/// An `AppError` rendered as `{"error": code, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        BudgetError::from(err).into()
    }
}

impl From<ComputationError> for ApiError {
    fn from(err: ComputationError) -> Self {
        BudgetError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        Self(match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(message),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(message),
            _ => AppError::Validation(message),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        warn!(error = %self.0, code = self.0.error_code(), "Request rejected");

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

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(
        BudgetError::Validation(ValidationError::MissingField("income")),
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR"
    )]
    #[case(
        BudgetError::Computation(ComputationError::ZeroIncome),
        StatusCode::UNPROCESSABLE_ENTITY,
        "BUSINESS_RULE_VIOLATION"
    )]
    #[tokio::test]
    async fn test_budget_errors_render_as_json(
        #[case] err: BudgetError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), status);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], code);
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}
