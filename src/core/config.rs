use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub chat_model: String,
    pub vision_model: String,
    pub embedding_model: String,
    pub caption_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gemini_api_hostname = env::var("GEMINI_API_HOSTNAME")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        // The key can also be pasted into the sidebar at runtime so an
        // empty value here is not an error
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let chat_model =
            env::var("HUB_CHAT_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());
        let vision_model =
            env::var("HUB_VISION_MODEL").unwrap_or_else(|_| "gemini-pro-vision".to_string());
        let embedding_model =
            env::var("HUB_EMBEDDING_MODEL").unwrap_or_else(|_| "embedding-001".to_string());
        let caption_prompt = env::var("HUB_CAPTION_PROMPT").unwrap_or_else(|_| {
            "Please provide a brief and descriptive caption for this image.".to_string()
        });

        Self {
            gemini_api_hostname,
            gemini_api_key,
            chat_model,
            vision_model,
            embedding_model,
            caption_prompt,
        }
    }
}
