//! Router for the key configuration API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn config_get(State(state): State<SharedState>) -> Json<public::ConfigResponse> {
    let shared_state = state.read().expect("Unable to read shared state");
    Json(public::ConfigResponse {
        api_key_set: !shared_state.api_key.is_empty(),
        chat_model: shared_state.config.chat_model.clone(),
        vision_model: shared_state.config.vision_model.clone(),
        embedding_model: shared_state.config.embedding_model.clone(),
    })
}

async fn config_set(State(state): State<SharedState>, Json(payload): Json<public::SetKeyRequest>) {
    // No validation or scoping, the key is stored as pasted
    state
        .write()
        .expect("Unable to write shared state")
        .api_key = payload.api_key;
}

/// Create the config router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(config_get).post(config_set))
}
