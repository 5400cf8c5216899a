use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::interface::FallbackTranslator;
use crate::error::{TranslateError, TranslateResult};

const PROVIDER: &str = "chat_completion";

/// Fixed instruction sent with every fallback request. It always assumes
/// English input, whatever `sl`/`tl` the caller supplied.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an English to Arabic translating service. Reply only with the Arabic translation.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice, or an empty string.
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(|content| content.trim().to_string())
            .unwrap_or_default()
    }
}

/// OpenAI-compatible chat-completion translator (Groq by default)
pub struct ChatCompletionTranslator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionTranslator {
    pub fn new(client: Client, base_url: String, api_key: String, model: String) -> Self {
        info!(
            "Initialized ChatCompletionTranslator: model={}, base_url={}",
            model, base_url
        );
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    pub fn build_request(&self, query: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: query.to_string(),
                },
            ],
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl FallbackTranslator for ChatCompletionTranslator {
    async fn fetch_fallback(&self, query: &str) -> TranslateResult<String> {
        let request = self.build_request(query);

        let response = async {
            self.client
                .post(self.endpoint())
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json::<ChatCompletionResponse>()
                .await
        }
        .await
        .map_err(|e| {
            error!("Error fetching data from chat completion provider: {}", e);
            TranslateError::provider_unavailable(PROVIDER, e)
        })?;

        let content = response.first_content();
        debug!("Chat completion content: {:?}", content);
        Ok(content)
    }
}
