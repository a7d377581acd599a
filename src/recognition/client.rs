use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompts::{meal_prompt, EXERCISE_PROMPT};
use crate::config::RecognitionConfig;
use crate::meals::model::FoodItem;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("reply had no message content")]
    EmptyReply,
}

/// Returns the model's raw reply text; callers extract and validate the JSON.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize_exercise(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> Result<String, UpstreamError>;
    async fn analyze_meal(&self, items: &[FoodItem]) -> Result<String, UpstreamError>;
}

/// Client for the DashScope OpenAI-compatible chat completions endpoint.
pub struct QwenClient {
    http: reqwest::Client,
    config: RecognitionConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: Content<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Content<'a> {
    Text(String),
    Parts(Vec<Part<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl QwenClient {
    pub fn new(config: RecognitionConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    async fn complete(&self, request: &ChatRequest<'_>) -> Result<String, UpstreamError> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_url.trim_end_matches('/')
        );
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(UpstreamError::EmptyReply)?;
        debug!(model = request.model, reply_len = content.len(), "model replied");
        Ok(content)
    }
}

#[async_trait]
impl Recognizer for QwenClient {
    async fn recognize_exercise(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> Result<String, UpstreamError> {
        let data_url = format!("data:{};base64,{}", content_type, STANDARD.encode(&image));
        let request = ChatRequest {
            model: &self.config.vision_model,
            messages: vec![Message {
                role: "user",
                content: Content::Parts(vec![
                    Part::Text {
                        text: EXERCISE_PROMPT,
                    },
                    Part::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                ]),
            }],
            temperature: self.config.vision_temperature,
            max_tokens: self.config.vision_max_tokens,
        };
        self.complete(&request).await
    }

    async fn analyze_meal(&self, items: &[FoodItem]) -> Result<String, UpstreamError> {
        let request = ChatRequest {
            model: &self.config.diet_model,
            messages: vec![Message {
                role: "user",
                content: Content::Text(meal_prompt(items)),
            }],
            temperature: self.config.diet_temperature,
            max_tokens: self.config.diet_max_tokens,
        };
        self.complete(&request).await
    }
}

/// Test double replying with fixed text; `None` simulates an upstream outage.
#[cfg(test)]
pub(crate) struct CannedRecognizer {
    pub exercise_reply: Option<String>,
    pub meal_reply: Option<String>,
}

#[cfg(test)]
impl CannedRecognizer {
    pub fn failing() -> Self {
        Self {
            exercise_reply: None,
            meal_reply: None,
        }
    }

    pub fn exercise(reply: &str) -> Self {
        Self {
            exercise_reply: Some(reply.to_string()),
            meal_reply: None,
        }
    }

    pub fn meal(reply: &str) -> Self {
        Self {
            exercise_reply: None,
            meal_reply: Some(reply.to_string()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Recognizer for CannedRecognizer {
    async fn recognize_exercise(
        &self,
        _image: Bytes,
        _content_type: &str,
    ) -> Result<String, UpstreamError> {
        self.exercise_reply.clone().ok_or(UpstreamError::Status(503))
    }

    async fn analyze_meal(&self, _items: &[FoodItem]) -> Result<String, UpstreamError> {
        self.meal_reply.clone().ok_or(UpstreamError::Status(503))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vision_request_serializes_as_content_parts() {
        let request = ChatRequest {
            model: "vision",
            messages: vec![Message {
                role: "user",
                content: Content::Parts(vec![
                    Part::Text { text: "read this" },
                    Part::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/png;base64,AAAA".into(),
                        },
                    },
                ]),
            }],
            temperature: 0.1,
            max_tokens: 1000,
        };
        let value = serde_json::to_value(&request).unwrap();
        let parts = &value["messages"][0]["content"];
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[0]["text"], "read this");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn text_request_serializes_content_as_string() {
        let request = ChatRequest {
            model: "diet",
            messages: vec![Message {
                role: "user",
                content: Content::Text("rate this".into()),
            }],
            temperature: 0.3,
            max_tokens: 1500,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["content"], "rate this");
        assert_eq!(value["max_tokens"], 1500);
    }

    #[test]
    fn reply_without_content_is_tolerated_by_decoder() {
        let reply: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(reply.choices[0].message.content.is_none());
    }
}
