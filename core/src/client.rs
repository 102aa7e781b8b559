use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::{SuggesterConfig, API_KEY_ENV_VAR};
use crate::errors::{GeminiError, GeminiResult};
use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Connect timeout applied to every outbound request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Gemini generateContent endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model_name: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a new Gemini API client.
    ///
    /// Fails when no API key can be resolved. The request timeout is fixed
    /// here so every round trip is bounded.
    pub fn new(config: &SuggesterConfig) -> GeminiResult<Self> {
        let api_key = config.resolved_api_key().ok_or_else(|| {
            GeminiError::ConfigError(format!(
                "API key is required to initialize the Gemini client (set {} or the api_key config field)",
                API_KEY_ENV_VAR
            ))
        })?;

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                GeminiError::RequestError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            api_key,
            model_name: config.model_name(),
            api_base: config.api_base(),
        })
    }

    /// Model this client generates with.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model_name, self.api_key
        )
    }

    /// Sends one generateContent request: a single attempt, no retry, no
    /// backoff.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        debug!(model = %self.model_name, "Sending generateContent request");

        let response = self
            .http_client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::RequestError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            GeminiError::ResponseError(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            // Surface the structured API error when the body carries one.
            if let Ok(envelope) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(GeminiError::HttpError {
                    status_code: status.as_u16(),
                    message: format!(
                        "{} (code: {}, status: {})",
                        envelope.error.message, envelope.error.code, envelope.error.status
                    ),
                });
            }
            return Err(GeminiError::HttpError {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::ParsingError(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                response_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }

        Ok(parsed)
    }
}
