//! API routes module

pub mod caption;
pub mod chat;
pub mod config;
pub mod embed;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
        // Image captioning routes
        .nest("/caption", caption::router())
        // Text embedding routes
        .nest("/embed", embed::router())
        // API key configuration routes
        .nest("/config", config::router())
}
