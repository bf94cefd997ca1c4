//! Inquire prompts for settings missing from the environment.

use crate::domain::DomainError;
use inquire::validator::Validation;
use inquire::{CustomUserError, Text};

/// Ask the operator for the channel id to analyze.
pub fn prompt_channel_id() -> Result<String, DomainError> {
    Text::new("YouTube channel ID:")
        .with_help_message("e.g. UC_x5XG1OV2P6uZZ5FSM9Ttw (set YT_SENTIMENT_CHANNEL_ID to skip)")
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok::<_, CustomUserError>(Validation::Invalid(
                    "Channel ID must not be empty".into(),
                ))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()
        .map(|s| s.trim().to_string())
        .map_err(|e| DomainError::InvalidInput(format!("channel prompt: {}", e)))
}
