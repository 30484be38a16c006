//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use gemini_hub::api::AppState;
use gemini_hub::api::app;
use gemini_hub::core::AppConfig;

/// Creates a test application router pointed at a mock Gemini API
/// host. Pass an empty `api_key` to exercise the missing-key paths.
pub fn test_app(gemini_api_hostname: &str, api_key: &str) -> Router {
    let config = AppConfig {
        gemini_api_hostname: gemini_api_hostname.to_string(),
        gemini_api_key: api_key.to_string(),
        chat_model: String::from("gemini-pro"),
        vision_model: String::from("gemini-pro-vision"),
        embedding_model: String::from("embedding-001"),
        caption_prompt: String::from(
            "Please provide a brief and descriptive caption for this image.",
        ),
    };
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A generateContent response body with a single text reply
pub fn chat_reply_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
