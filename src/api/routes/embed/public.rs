//! Public types for the text embedding API
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct EmbedRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct EmbedResponse {
    pub values: Vec<f64>,
}
