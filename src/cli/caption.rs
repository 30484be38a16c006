use anyhow::{Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::AppConfig;
use crate::gemini::caption_image;
use crate::media::mime_for_path;

pub async fn run(image_path: &str) -> Result<()> {
    let config = AppConfig::default();
    if config.gemini_api_key.is_empty() {
        bail!("Missing GEMINI_API_KEY. Set it to caption images.");
    }

    let mime_type = mime_for_path(image_path)?;
    let bytes = std::fs::read(image_path)?;

    let caption = caption_image(
        &config.caption_prompt,
        mime_type,
        &STANDARD.encode(&bytes),
        &config.gemini_api_hostname,
        &config.gemini_api_key,
        &config.vision_model,
    )
    .await?;

    println!("{}", caption);
    Ok(())
}
