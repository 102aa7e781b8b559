use guardian_core::errors::SuggestError;
use guardian_core::suggest::Suggester;
use guardian_core::types::{SuggestionRequest, SuggestionResult};
use tracing::{error, info};

/// Submissions shorter than this never reach the provider.
pub const MIN_DEVICE_LOG_CHARS: usize = 10;

/// Checks a submission before it is allowed to dispatch.
///
/// The messages are shown verbatim in the dashboard, so they stay fixed.
pub fn validate_device_logs(device_logs: &str) -> Result<(), SuggestError> {
    if device_logs.trim().is_empty() {
        return Err(SuggestError::Validation(
            "Device logs cannot be empty.".to_string(),
        ));
    }
    if device_logs.chars().count() < MIN_DEVICE_LOG_CHARS {
        return Err(SuggestError::Validation(
            "Device logs must be at least 10 characters long.".to_string(),
        ));
    }
    Ok(())
}

/// Validates the submission, then runs the suggestion pipeline.
pub async fn get_ai_commands(
    suggester: &Suggester,
    input: &SuggestionRequest,
) -> Result<SuggestionResult, SuggestError> {
    validate_device_logs(&input.device_logs)?;

    match suggester.suggest(input).await {
        Ok(result) => {
            info!(
                commands = result.suggested_commands.len(),
                "Suggestion flow completed"
            );
            Ok(result)
        }
        Err(e) => {
            error!(error = %e, "Error getting AI commands");
            Err(e)
        }
    }
}
