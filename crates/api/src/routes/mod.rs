//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod advice;
pub mod budget;
pub mod health;
pub mod personas;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(budget::routes())
        .merge(advice::routes())
        .merge(personas::routes())
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use finbot_advisor::{AdviceGenerator, Persona};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{AppState, create_router};

    /// Answers with the persona and question it was given.
    pub struct EchoAdvisor;

    #[async_trait]
    impl AdviceGenerator for EchoAdvisor {
        async fn generate_advice(&self, question: &str, persona: Persona) -> String {
            format!("[{persona}] {question}")
        }
    }

    pub fn test_app() -> Router {
        create_router(AppState::new(EchoAdvisor))
    }

    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }
}
