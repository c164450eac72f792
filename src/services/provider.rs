use crate::config::{Config, ProviderKind};
use crate::error::{Error, Result};
use crate::services::prompt::PromptPair;
use reqwest::Client;
use serde_json::{json, Value as JsonValue};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// LLM provider capability, selected once at startup. The live variants send
/// exactly one chat request per call and return the raw assistant text; the
/// mock variant performs no I/O and makes `chat` fail so callers fall back
/// to local generation.
#[derive(Clone)]
pub enum Provider {
    Ollama(OllamaClient),
    OpenAi(OpenAiClient),
    Mock,
}

impl Provider {
    pub fn from_config(config: &Config, client: Client) -> Self {
        match config.provider {
            ProviderKind::Ollama => Provider::Ollama(OllamaClient::new(
                client,
                config.ollama_base_url.clone(),
                config.ollama_model.clone(),
            )),
            ProviderKind::OpenAi => match &config.openai_api_key {
                Some(key) => Provider::OpenAi(OpenAiClient::new(
                    client,
                    key.clone(),
                    config.openai_model.clone(),
                )),
                None => {
                    tracing::warn!(
                        "OPENAI_API_KEY is not set, degrading to mock quiz generation"
                    );
                    Provider::Mock
                }
            },
            ProviderKind::Mock => Provider::Mock,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ollama(_) => "ollama",
            Self::OpenAi(_) => "openai",
            Self::Mock => "mock",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Self::Ollama(c) => &c.model,
            Self::OpenAi(c) => &c.model,
            Self::Mock => "mock",
        }
    }

    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Mock)
    }

    pub async fn chat(&self, prompt: &PromptPair) -> Result<String> {
        match self {
            Self::Ollama(c) => c.chat(prompt).await,
            Self::OpenAi(c) => c.chat(prompt).await,
            Self::Mock => Err(Error::NoProvider),
        }
    }
}

/// Client for Ollama's `/api/chat` endpoint.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(client: Client, base_url: String, model: String) -> Self {
        Self {
            client,
            base_url,
            model,
        }
    }

    async fn chat(&self, prompt: &PromptPair) -> Result<String> {
        let payload = json!({
            "model": self.model,
            "stream": false,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
        });

        let res = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Provider { status, body });
        }

        let body: JsonValue = res.json().await?;
        let content = body
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

/// Client for OpenAI's chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(client: Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }

    async fn chat(&self, prompt: &PromptPair) -> Result<String> {
        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.7,
        });

        let res = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Provider { status, body });
        }

        let body: JsonValue = res.json().await?;
        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(content.to_string())
    }
}
