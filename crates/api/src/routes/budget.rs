//! Budget analysis routes.

use axum::{Json, Router, extract::rejection::JsonRejection, routing::post};
use finbot_core::budget::{AnalysisResult, BudgetAnalyzer, validate_goal};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/budget/analyze", post(analyze_budget))
}

/// Request body for a budget analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeBudgetRequest {
    /// `{"income": .., "expenses": {..}}`, either inline or as JSON text.
    pub budget: Value,
    /// Optional savings goal.
    #[serde(default)]
    pub goal_amount: Option<Value>,
}

/// `POST /budget/analyze`
async fn analyze_budget(
    payload: Result<Json<AnalyzeBudgetRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;

    let goal: Option<Decimal> = validate_goal(request.goal_amount.as_ref())?;
    let declaration = match &request.budget {
        Value::String(text) => BudgetAnalyzer::parse(text)?,
        raw => BudgetAnalyzer::validate(raw)?,
    };
    let result = BudgetAnalyzer::analyze(&declaration, goal)?;

    info!(
        categories = declaration.expenses().len(),
        health_score = result.health_score,
        savings_rate = %result.savings_rate_percent,
        "Budget analyzed"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{post_json, send, test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rstest::rstest;
    use serde_json::{Value, json};

    const URI: &str = "/api/v1/budget/analyze";

    fn sample_budget() -> Value {
        json!({
            "income": 65000,
            "expenses": {
                "rent": 20000,
                "food": 8000,
                "entertainment": 5000,
                "transport": 3000,
                "shopping": 7000,
                "utilities": 2000
            }
        })
    }

    #[tokio::test]
    async fn test_analyze_inline_budget() {
        let (status, body) = post_json(test_app(), URI, &json!({"budget": sample_budget()})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_expenses"], "45000");
        assert_eq!(body["savings"], "20000");
        assert_eq!(body["savings_rate_percent"], "30.77");
        assert_eq!(body["health_score"], 44);
        assert_eq!(body["classifications"]["rent"], "Need");
        assert_eq!(body["classifications"]["shopping"], "Want");
        assert_eq!(body["goal"]["status"], "not_requested");

        let order: Vec<&str> = body["breakdown"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["category"].as_str().unwrap())
            .collect();
        assert_eq!(
            order,
            ["rent", "food", "entertainment", "transport", "shopping", "utilities"]
        );
    }

    #[tokio::test]
    async fn test_analyze_budget_text_with_goal() {
        let request = json!({
            "budget": sample_budget().to_string(),
            "goal_amount": 100_000
        });
        let (status, body) = post_json(test_app(), URI, &request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["goal"]["status"], "reachable");
        assert_eq!(body["goal"]["months_needed"], 5);
        assert!(body["goal"]["advisory"].is_null());
    }

    #[rstest]
    #[case(json!({"budget": {"expenses": {}}}))]
    #[case(json!({"budget": {"income": "lots", "expenses": {}}}))]
    #[case(json!({"budget": {"income": 1000, "expenses": {"food": -5}}}))]
    #[case(json!({"budget": "{not json"}))]
    #[case(json!({"budget": {"income": 1000, "expenses": {}}, "goal_amount": -1}))]
    #[case(json!({"goal_amount": 10}))]
    #[tokio::test]
    async fn test_invalid_requests_are_rejected(#[case] request: Value) {
        let (status, body) = post_json(test_app(), URI, &request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let request = json!({"budget": "x".repeat(128 * 1024)});
        let (status, body) = post_json(test_app(), URI, &request).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let request = Request::builder()
            .method("POST")
            .uri(URI)
            .body(Body::from(json!({"budget": sample_budget()}).to_string()))
            .unwrap();
        let (status, body) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_zero_income_is_unprocessable() {
        let request = json!({"budget": {"income": 0, "expenses": {"rent": 100}}});
        let (status, body) = post_json(test_app(), URI, &request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");
    }
}
