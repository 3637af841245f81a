use serde::{Deserialize, Serialize};

use super::error::GatewayError;

/// Body of `POST /api/plagiarism-check`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CheckRequest {
    pub text: String,
}

impl CheckRequest {
    /// Returns the trimmed text if it has at least `min_chars` characters.
    pub fn validate(self, min_chars: usize) -> Result<String, GatewayError> {
        let text = self.text.trim();
        let chars = text.chars().count();
        if chars < min_chars {
            return Err(GatewayError::InvalidRequest(format!(
                "text must be at least {min_chars} characters, got {chars}"
            )));
        }
        Ok(text.to_string())
    }
}
