//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::state::AppState;
use crate::gemini::send_chat_message;

type SharedState = Arc<RwLock<AppState>>;

/// Get a single chat transcript by session ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let transcript = state
        .read()
        .expect("Unable to read shared state")
        .sessions
        .get(&id)
        .cloned();

    let Some(transcript) = transcript else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    let transcript = transcript.iter().map(public::ChatTurn::from).collect();
    Ok(axum::Json(public::ChatTranscriptResponse { transcript }).into_response())
}

/// Run the next exchange in a chat session
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    // Submission only happens on non-empty input
    if payload.message.trim().is_empty() {
        return Ok((StatusCode::BAD_REQUEST, "Message must not be empty".to_string())
            .into_response());
    }

    let (api_key, api_hostname, chat_model, mut transcript) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.api_key.clone(),
            shared_state.config.gemini_api_hostname.clone(),
            shared_state.config.chat_model.clone(),
            shared_state
                .sessions
                .get(&payload.session_id)
                .cloned()
                .unwrap_or_default(),
        )
    };

    if api_key.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Please enter your Gemini API Key.".to_string(),
        )
            .into_response());
    }

    let reply = send_chat_message(
        &mut transcript,
        &payload.message,
        &api_hostname,
        &api_key,
        &chat_model,
    )
    .await?;

    // Write the updated transcript back to the session store
    state
        .write()
        .expect("Unable to write shared state")
        .sessions
        .insert(payload.session_id.clone(), transcript.clone());

    let transcript = transcript.iter().map(public::ChatTurn::from).collect();
    Ok(axum::Json(public::ChatResponse { reply, transcript }).into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
}
