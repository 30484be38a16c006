//! Public types for the image captioning API
use serde::{Deserialize, Serialize};

/// The page reads the uploaded file with a FileReader and sends the
/// bytes base64 encoded
#[derive(Deserialize, Serialize)]
pub struct CaptionRequest {
    pub mime_type: String,
    pub image: String,
}

#[derive(Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
    /// 800x500 PNG preview as a data URL
    pub preview: String,
}
