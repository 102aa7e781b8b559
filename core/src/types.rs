use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder reasoning used when the model produced no usable output.
pub const NO_OUTPUT_REASONING: &str = "No output from AI.";

/// Raw device log text submitted from the dashboard.
///
/// Constructed per submission and discarded once the call returns; nothing
/// is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// The logs from the target Android device.
    pub device_logs: String,
}

/// Maintenance command suggestions plus the model's justification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    /// Suggested maintenance commands, such as clear cache or remove unused
    /// files. May be empty when the model found nothing to suggest.
    pub suggested_commands: Vec<String>,
    /// The explanation for why these commands are suggested based on the
    /// logs. Always present.
    pub reasoning: String,
}

impl SuggestionResult {
    /// The degrade-gracefully value returned when the model reply carried no
    /// output at all.
    pub fn no_output() -> Self {
        Self {
            suggested_commands: Vec::new(),
            reasoning: NO_OUTPUT_REASONING.to_string(),
        }
    }
}

/// Request to the Gemini API to generate content
#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Content structure for requests and responses
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Content {
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Part structure for a piece of content
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: String) -> Self {
        Self { text: Some(text) }
    }
}

/// Generation configuration options
#[derive(Serialize, Debug, Default)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
    /// MIME type requested for the reply; `application/json` makes the model
    /// emit machine-parseable output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the reply must match when a JSON MIME type is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// Response from the Gemini API
#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    /// Absent entirely when the prompt was blocked.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// Candidate in the response
#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Token accounting reported alongside a response
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

/// Error envelope the API returns on non-2xx statuses
#[derive(Deserialize, Debug)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorDetail {
    pub code: u32,
    pub message: String,
    pub status: String,
}
