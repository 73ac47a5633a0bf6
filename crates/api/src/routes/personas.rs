//! Persona listing.

use axum::{Json, Router, routing::get};
use finbot_advisor::Persona;

use crate::AppState;

/// `GET /personas`
async fn list_personas() -> Json<Vec<&'static str>> {
    Json(Persona::ALL.into_iter().map(Persona::label).collect())
}

/// Creates the persona routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/personas", get(list_personas))
}
