use anyhow::{Result, bail};
use serde_json::json;

use crate::core::AppConfig;
use crate::gemini::{embed_content, embedding_values};

pub async fn run(text: &str) -> Result<()> {
    let config = AppConfig::default();
    if config.gemini_api_key.is_empty() {
        bail!("Missing GEMINI_API_KEY. Set it to embed text.");
    }

    let response = embed_content(
        text,
        &config.gemini_api_hostname,
        &config.gemini_api_key,
        &config.embedding_model,
    )
    .await?;
    let values = embedding_values(&response)?;

    println!(
        "{}",
        json!({
            "text": text,
            "values": values,
        })
    );
    Ok(())
}
