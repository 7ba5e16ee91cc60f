use crate::AssistantError;
use async_trait::async_trait;
use deepmail_core::{ChatMessage, ChatRole};

/// The generative-text collaborator. Given the prior turns and a new
/// prompt it returns assistant text or fails; retry, backoff, and timeout
/// policy belong to the implementation, not the callers.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn reply(
        &self,
        history: &[ChatMessage],
        prompt: &str,
    ) -> Result<String, AssistantError>;
}

/// Gemini `generateContent` backend.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        api_base: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, AssistantError> {
        let api_key =
            api_key.ok_or_else(|| AssistantError::Config("missing assistant API key".to_string()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            model: model.into(),
            api_key,
        })
    }

    fn request_body(history: &[ChatMessage], prompt: &str) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|message| {
                let role = match message.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{"text": message.content}]
                })
            })
            .collect();
        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{"text": prompt}]
        }));

        serde_json::json!({ "contents": contents })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn reply(
        &self,
        history: &[ChatMessage],
        prompt: &str,
    ) -> Result<String, AssistantError> {
        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let response = self
            .http
            .post(endpoint)
            .json(&Self::request_body(history, prompt))
            .send()
            .await?
            .error_for_status()?;

        let json: serde_json::Value = response.json().await?;
        json.pointer("/candidates/0/content/parts/0/text")
            .and_then(|value| value.as_str())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AssistantError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn request_body_maps_roles_and_appends_prompt() {
        let history = vec![
            ChatMessage {
                role: ChatRole::User,
                content: "hello".to_string(),
                timestamp: Utc::now(),
            },
            ChatMessage {
                role: ChatRole::Assistant,
                content: "hi there".to_string(),
                timestamp: Utc::now(),
            },
        ];

        let body = GeminiClient::request_body(&history, "what's new?");
        let contents = body.pointer("/contents").and_then(|v| v.as_array()).unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].pointer("/role").unwrap(), "user");
        assert_eq!(contents[1].pointer("/role").unwrap(), "model");
        assert_eq!(
            contents[2].pointer("/parts/0/text").unwrap(),
            "what's new?"
        );
    }

    #[test]
    fn client_requires_an_api_key() {
        let client = GeminiClient::new("https://example.test/v1beta", "gemini-1.5-flash", None);
        assert!(matches!(client, Err(AssistantError::Config(_))));
    }
}
