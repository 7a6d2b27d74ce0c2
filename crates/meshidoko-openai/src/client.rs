use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::OpenAiError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ErrorResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/";

const MODEL: &str = "gpt-4";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 150;

/// Client for the OpenAI chat completions API.
///
/// Use [`OpenAiClient::new`] for production or
/// [`OpenAiClient::with_base_url`] to point at a mock server in tests.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl OpenAiClient {
    /// Creates a new client pointed at the production OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, OpenAiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OpenAiError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OpenAiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("meshidoko/0.1 (restaurant-search)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| OpenAiError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Requests one completion for a system + user message pair and
    /// returns the trimmed assistant text.
    ///
    /// An empty or missing completion returns an empty string; deciding
    /// whether that counts as usable output is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`OpenAiError::ApiError`] if the API returns a non-2xx status.
    /// - [`OpenAiError::Http`] on network failure.
    /// - [`OpenAiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn chat_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, OpenAiError> {
        let url = self
            .base_url
            .join("v1/chat/completions")
            .map_err(|e| OpenAiError::ApiError(format!("invalid endpoint path: {e}")))?;

        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!(model = MODEL, "requesting sentence completion");
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(OpenAiError::ApiError(message));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| OpenAiError::Deserialize {
                context: "chat/completions".to_string(),
                source: e,
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
