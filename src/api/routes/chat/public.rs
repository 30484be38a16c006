//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::gemini::Content;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// A transcript turn with the role translated for display
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

impl From<&Content> for ChatTurn {
    fn from(content: &Content) -> Self {
        ChatTurn {
            role: content.role.display_name().to_string(),
            text: content.text(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub transcript: Vec<ChatTurn>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<ChatTurn>,
}
