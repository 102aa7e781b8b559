//! Prompt construction for the maintenance-suggestion flow.

/// Substitution marker for the device log text.
const DEVICE_LOGS_SLOT: &str = "{{deviceLogs}}";

/// Fixed instruction sent to the model. One substitution point; the log text
/// is interpolated verbatim.
pub const SUGGEST_MAINTENANCE_TEMPLATE: &str = "You are an expert Android device maintenance assistant.
Analyze the provided device logs and suggest a list of maintenance commands to optimize the device's performance and security.
Explain your reasoning for each suggested command.

Device Logs:
{{deviceLogs}}";

/// Renders the suggestion prompt with the raw log text. No escaping, no
/// truncation.
pub fn render_suggestion_prompt(device_logs: &str) -> String {
    SUGGEST_MAINTENANCE_TEMPLATE.replace(DEVICE_LOGS_SLOT, device_logs)
}
