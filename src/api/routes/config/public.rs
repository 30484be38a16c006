//! Public types for the key configuration API
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct SetKeyRequest {
    pub api_key: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConfigResponse {
    /// Whether a non-empty API key is set. The key itself is never
    /// echoed back to the page.
    pub api_key_set: bool,
    pub chat_model: String,
    pub vision_model: String,
    pub embedding_model: String,
}
