//! Router for the text embedding API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::gemini::{embed_content, embedding_values};

type SharedState = Arc<RwLock<AppState>>;

/// Embed free text and return the raw vector. No length bound is
/// enforced here; oversized input is the remote API's to reject.
async fn embed_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::EmbedRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    if payload.text.trim().is_empty() {
        return Ok(
            (StatusCode::BAD_REQUEST, "Text must not be empty".to_string()).into_response(),
        );
    }

    let (api_key, api_hostname, embedding_model) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.api_key.clone(),
            shared_state.config.gemini_api_hostname.clone(),
            shared_state.config.embedding_model.clone(),
        )
    };

    if api_key.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Please enter your Gemini API Key.".to_string(),
        )
            .into_response());
    }

    let response = embed_content(&payload.text, &api_hostname, &api_key, &embedding_model).await?;
    let values = embedding_values(&response)?;

    Ok(axum::Json(public::EmbedResponse { values }).into_response())
}

/// Create the embed router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(embed_handler))
}
