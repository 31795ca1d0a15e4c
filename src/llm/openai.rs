use super::ChatModel;
use crate::config::openai_api_key;
use crate::error::LlmError;
use anyhow::Result;
use serde_json::json;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completion client for the OpenAI API
pub struct OpenAiChat {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiChat {
    /// Create a client reading the API key from `OPENAI_API_KEY`
    pub fn from_env(model: &str) -> Result<Self, LlmError> {
        let api_key =
            openai_api_key().map_err(|e| LlmError::InitializationFailed(e.to_string()))?;
        Ok(Self::new(api_key, model))
    }

    /// Create a client with an explicit API key
    pub fn new(api_key: String, model: &str) -> Self {
        Self {
            api_key,
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for OpenAiChat {
    async fn complete(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Sending chat completion request to model {}", self.model);

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
            }))
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(
                LlmError::RequestFailed(format!("OpenAI API error ({}): {}", status, body)).into(),
            );
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let content = data
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| LlmError::InvalidResponse("missing choices[0].message.content".to_string()))?;

        Ok(content.to_string())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name() {
        let chat = OpenAiChat::new("k".into(), "gpt-4.1-nano");
        assert_eq!(chat.model_name(), "gpt-4.1-nano");
    }
}
