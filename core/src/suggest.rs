use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::client::GeminiClient;
use crate::config::SuggesterConfig;
use crate::errors::{GeminiResult, SuggestError};
use crate::prompt::render_suggestion_prompt;
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SuggestionRequest, SuggestionResult,
};

/// Low temperature keeps command lists stable for similar logs.
const SUGGESTION_TEMPERATURE: f32 = 0.2;

/// The maintenance-suggestion pipeline: prompt render, one provider round
/// trip, typed decode.
///
/// Holds no state between calls. Repeated submissions of identical logs each
/// reach the provider; nothing is cached or deduplicated.
#[derive(Debug, Clone)]
pub struct Suggester {
    client: GeminiClient,
}

impl Suggester {
    /// Builds the pipeline, failing fast when the provider client cannot be
    /// constructed.
    pub fn new(config: &SuggesterConfig) -> GeminiResult<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    /// Produces maintenance-command suggestions for the submitted logs.
    ///
    /// Empty input is rejected before any network activity. Exactly one
    /// provider request is made per call; there is no retry.
    pub async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResult, SuggestError> {
        if request.device_logs.trim().is_empty() {
            return Err(SuggestError::Validation(
                "Device logs cannot be empty.".to_string(),
            ));
        }

        let prompt = render_suggestion_prompt(&request.device_logs);
        let wire_request = build_wire_request(prompt);
        let response = self.client.generate_content(&wire_request).await?;
        decode_suggestions(&response)
    }
}

fn build_wire_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part::text(prompt)],
            role: Some("user".to_string()),
        }],
        generation_config: Some(GenerationConfig {
            temperature: Some(SUGGESTION_TEMPERATURE),
            max_output_tokens: None,
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(suggestion_response_schema()),
        }),
    }
}

/// Schema the model reply must match. Field names mirror the boundary types.
fn suggestion_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestedCommands": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "reasoning": { "type": "STRING" }
        },
        "required": ["suggestedCommands", "reasoning"]
    })
}

/// Turns the provider reply into the boundary type.
///
/// A reply with no usable text degrades to the fixed placeholder result. A
/// reply that carries text which does not match the expected shape is a
/// provider failure, not a silent fallback.
fn decode_suggestions(
    response: &GenerateContentResponse,
) -> Result<SuggestionResult, SuggestError> {
    let text = match output_text(response) {
        Some(text) => text,
        None => {
            warn!("Model returned no output; falling back to the placeholder result");
            return Ok(SuggestionResult::no_output());
        }
    };

    let payload = strip_code_fence(text);
    let result: SuggestionResult = serde_json::from_str(payload).map_err(|e| {
        SuggestError::Provider(format!(
            "Model reply did not match the expected shape: {}",
            e
        ))
    })?;

    debug!(
        commands = result.suggested_commands.len(),
        "Decoded suggestion reply"
    );
    Ok(result)
}

/// First non-empty text part of the first candidate, if any.
fn output_text(response: &GenerateContentResponse) -> Option<&str> {
    let candidate = response.candidates.first()?;

    if let Some(reason) = &candidate.finish_reason {
        if reason != "STOP" {
            warn!(finish_reason = %reason, "Generation did not finish normally");
        }
    }

    let content = candidate.content.as_ref()?;
    let text = content.parts.iter().find_map(|part| part.text.as_deref())?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Strips a markdown code fence when the model wrapped its JSON in one,
/// which some models do despite the requested MIME type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix("```") {
        Some(inner) => inner,
        None => return trimmed,
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}
