use anyhow::{Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::AppConfig;
use crate::gemini::send_chat_message;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    if config.gemini_api_key.is_empty() {
        bail!("Missing GEMINI_API_KEY. Set it to use the terminal chat.");
    }

    let mut transcript = Vec::new();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                // Only non-empty input is sent
                if line.trim().is_empty() {
                    continue;
                }
                let reply = send_chat_message(
                    &mut transcript,
                    line.as_str(),
                    &config.gemini_api_hostname,
                    &config.gemini_api_key,
                    &config.chat_model,
                )
                .await?;
                println!("{}", reply);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
