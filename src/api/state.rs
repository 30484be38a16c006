use std::collections::HashMap;

use crate::core::AppConfig;
use crate::gemini::Content;

pub struct AppState {
    // The Gemini API key pasted into the sidebar. Seeded from config
    // at startup and mutable for the lifetime of the process.
    pub api_key: String,
    // Chat transcripts keyed by the page's session id. Never
    // persisted; lives as long as the process.
    pub sessions: HashMap<String, Vec<Content>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            sessions: HashMap::new(),
            config,
        }
    }
}
