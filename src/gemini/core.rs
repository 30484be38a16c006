use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

/// Translate a Gemini role label into the label shown in the UI. The
/// API calls the other side of the conversation "model" but the page
/// renders it as "assistant". Unrecognized labels pass through
/// unchanged.
pub fn display_role(role: &str) -> &str {
    if role == "model" { "assistant" } else { role }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }

    pub fn display_name(&self) -> &'static str {
        display_role(self.as_str())
    }
}

// Object {
//     "role": String("user"),
//     "parts": Array [
//         Object { "text": String("What is in this image?") },
//         Object {
//             "inline_data": Object {
//                 "mime_type": String("image/png"),
//                 "data": String("iVBORw0KGgo...")
//             }
//         }
//     ]
// }
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: &str) -> Self {
        Content {
            role: Role::User,
            parts: vec![Part::Text {
                text: text.to_string(),
            }],
        }
    }

    pub fn model(text: &str) -> Self {
        Content {
            role: Role::Model,
            parts: vec![Part::Text {
                text: text.to_string(),
            }],
        }
    }

    /// A user turn carrying an instruction and an image. The image
    /// bytes must already be base64 encoded.
    pub fn user_with_image(text: &str, mime_type: &str, data: &str) -> Self {
        Content {
            role: Role::User,
            parts: vec![
                Part::Text {
                    text: text.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: data.to_string(),
                    },
                },
            ],
        }
    }

    /// Concatenated text of all text parts
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

pub async fn generate_content(
    contents: &Vec<Content>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, Error> {
    let payload = json!({
        "contents": contents,
    });
    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        api_hostname.trim_end_matches("/"),
        model,
        api_key
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 5))
        .json(&payload)
        .send()
        .await?
        .json()
        .await?;

    Ok(response)
}

pub async fn embed_content(
    text: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, Error> {
    // The request body wants the fully qualified model name while the
    // URL wants the bare one
    let payload = json!({
        "model": format!("models/{}", model),
        "content": {
            "parts": [{"text": text}]
        },
    });
    let url = format!(
        "{}/v1beta/models/{}:embedContent?key={}",
        api_hostname.trim_end_matches("/"),
        model,
        api_key
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?
        .json()
        .await?;

    Ok(response)
}

/// Pull the reply text out of a generateContent response. Candidates
/// can split the reply across multiple text parts.
pub fn reply_text(response: &Value) -> Result<String, Error> {
    let parts = response["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or(anyhow!("No candidates in response: {}", response))?;
    Ok(parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join(""))
}

/// Pull the vector out of an embedContent response
pub fn embedding_values(response: &Value) -> Result<Vec<f64>, Error> {
    let values = response["embedding"]["values"]
        .as_array()
        .ok_or(anyhow!("No embedding in response: {}", response))?;
    Ok(values.iter().filter_map(|v| v.as_f64()).collect())
}
