use super::error::ScenarioError;

/// Trim and validate a scenario name. Empty after trimming is the only
/// failure; the caller is expected to re-prompt, not to drop input.
pub fn validate_scenario_name(name: &str) -> Result<&str, ScenarioError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScenarioError::validation("scenario name must not be empty"));
    }
    Ok(trimmed)
}
