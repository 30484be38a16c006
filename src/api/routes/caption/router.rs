//! Router for the image captioning API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::public;
use crate::api::state::AppState;
use crate::gemini::caption_image;
use crate::media::{is_allowed_mime_type, preview_data_url};

type SharedState = Arc<RwLock<AppState>>;

/// Caption an uploaded image. The original bytes go to the vision
/// model; the preview returned to the page is the fixed-size resize.
async fn caption_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::CaptionRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    if !is_allowed_mime_type(&payload.mime_type) {
        return Ok((
            StatusCode::BAD_REQUEST,
            format!("Unsupported image type: {}", payload.mime_type),
        )
            .into_response());
    }

    let (api_key, api_hostname, vision_model, caption_prompt) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.api_key.clone(),
            shared_state.config.gemini_api_hostname.clone(),
            shared_state.config.vision_model.clone(),
            shared_state.config.caption_prompt.clone(),
        )
    };

    if api_key.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Please enter your Gemini API Key.".to_string(),
        )
            .into_response());
    }

    // Decode up front so a corrupt upload fails before any remote call
    let image_bytes = STANDARD.decode(&payload.image)?;
    let preview = preview_data_url(&image_bytes)?;

    let caption = caption_image(
        &caption_prompt,
        &payload.mime_type,
        &payload.image,
        &api_hostname,
        &api_key,
        &vision_model,
    )
    .await?;

    Ok(axum::Json(public::CaptionResponse { caption, preview }).into_response())
}

/// Create the caption router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(caption_handler))
}
