//! Advice routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use finbot_advisor::Persona;
use finbot_core::insight::{TextAnalyzer, TextInsight};
use finbot_shared::AppError;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the advice routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/advice", post(ask_advice))
}

/// Request body for a question.
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    /// Free-text financial question.
    pub question: String,
    /// Who is asking.
    pub persona: Persona,
}

/// Advice together with the local reading of the question.
#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    /// Generated advice, or a message explaining why there is none.
    pub advice: String,
    /// Keywords and sentiment of the question.
    pub analysis: TextInsight,
}

/// `POST /advice`
async fn ask_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let Json(request) = payload?;

    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question must not be empty".to_string()).into());
    }

    let analysis = TextAnalyzer::analyze(question);
    info!(
        persona = %request.persona,
        keywords = analysis.keywords.len(),
        sentiment = ?analysis.sentiment,
        "Advice requested"
    );

    let advice = state
        .advisor
        .generate_advice(question, request.persona)
        .await;

    Ok(Json(AdviceResponse { advice, analysis }))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{post_json, test_app};
    use axum::http::StatusCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    const URI: &str = "/api/v1/advice";

    #[tokio::test]
    async fn test_advice_with_analysis() {
        let request = json!({
            "question": "  I am worried about my credit card debt  ",
            "persona": "Working Professional"
        });
        let (status, body) = post_json(test_app(), URI, &request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["advice"],
            "[Working Professional] I am worried about my credit card debt"
        );
        assert_eq!(
            body["analysis"]["keywords"],
            json!(["card", "credit", "debt", "worried"])
        );
        assert_eq!(body["analysis"]["sentiment"], "negative");
    }

    #[rstest]
    #[case(json!({"question": "   ", "persona": "Student"}))]
    #[case(json!({"question": "How do I save?", "persona": "Investor"}))]
    #[case(json!({"persona": "Retiree"}))]
    #[tokio::test]
    async fn test_invalid_requests_are_rejected(#[case] request: Value) {
        let (status, body) = post_json(test_app(), URI, &request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
