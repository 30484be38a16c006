use anyhow::{Error, Result};

use crate::gemini::{Content, generate_content, reply_text};

/// Runs the next turn in chat: sends the transcript plus the user's
/// new message to the model and, on success, appends both the user
/// turn and the model's reply to the transcript. Returns the reply
/// text.
///
/// Turns alternate user/model starting with user because this is the
/// only way entries are added, and a failed remote call appends
/// nothing.
pub async fn send_chat_message(
    transcript: &mut Vec<Content>,
    prompt: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let user_turn = Content::user(prompt);

    let mut contents = transcript.clone();
    contents.push(user_turn.clone());

    let response = generate_content(&contents, api_hostname, api_key, model).await?;
    let reply = reply_text(&response)?;

    transcript.push(user_turn);
    transcript.push(Content::model(&reply));

    Ok(reply)
}

/// One-shot caption request: the instruction text and the image bytes
/// (base64 encoded) go to the vision model as a single user turn.
pub async fn caption_image(
    instruction: &str,
    mime_type: &str,
    image_base64: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let contents = vec![Content::user_with_image(
        instruction,
        mime_type,
        image_base64,
    )];
    let response = generate_content(&contents, api_hostname, api_key, model).await?;
    reply_text(&response)
}
