//! Advisor error types.

use thiserror::Error;

use crate::messages::{MISSING_API_KEY, OFFLINE_FALLBACK};

/// Advice generation errors.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No API key configured.
    #[error("API key is not configured")]
    MissingApiKey,

    /// Quota exhausted, service unavailable, or an internal model error.
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    /// The model returned no candidates, usually because the prompt was blocked.
    #[error("No candidates returned; prompt feedback: {feedback}")]
    NoCandidates {
        /// Prompt feedback reported by the API.
        feedback: String,
    },

    /// The model stopped for a reason other than finishing its answer.
    #[error("Response was blocked: {reason}")]
    Blocked {
        /// Finish reason name, e.g. `SAFETY`.
        reason: String,
    },

    /// The API rejected the request.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The response had no text part.
    #[error("Model returned no text")]
    EmptyResponse,

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AdvisorError {
    /// Text shown to the user in place of advice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => MISSING_API_KEY.to_string(),
            Self::Unavailable(_) => OFFLINE_FALLBACK.to_string(),
            Self::NoCandidates { feedback } => format!(
                "Error: Generation failed. The prompt was likely blocked. Feedback: {feedback}"
            ),
            Self::Blocked { reason } => {
                format!("Error: Response was blocked by the API.\nReason: **{reason}**")
            }
            Self::Api { .. } | Self::EmptyResponse | Self::Http(_) => {
                format!("Error generating advice: {self}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_uses_fallback() {
        let message = AdvisorError::Unavailable("429".into()).user_message();
        assert_eq!(message, OFFLINE_FALLBACK);
    }

    #[test]
    fn test_blocked_names_reason() {
        let message = AdvisorError::Blocked {
            reason: "SAFETY".into(),
        }
        .user_message();
        assert!(message.contains("**SAFETY**"));
    }

    #[test]
    fn test_api_error_describes_cause() {
        let message = AdvisorError::Api {
            status: 400,
            body: "bad request".into(),
        }
        .user_message();
        assert_eq!(
            message,
            "Error generating advice: API error (status 400): bad request"
        );
    }
}
