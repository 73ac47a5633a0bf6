//! Gemini `generateContent` backend.

use std::time::Duration;

use async_trait::async_trait;
use finbot_shared::AdvisorConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AdvisorError;
use crate::generator::AdviceGenerator;
use crate::messages::{SYSTEM_INSTRUCTION, user_prompt};
use crate::persona::Persona;

/// Finish reason of a complete answer.
const FINISH_STOP: &str = "STOP";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Advice generator backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiAdvisor {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiAdvisor {
    /// Creates an advisor from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Requests advice, surfacing every failure as an `AdvisorError`.
    ///
    /// # Errors
    ///
    /// - `MissingApiKey` without a key
    /// - `Unavailable` for HTTP 429/500/503, timeouts and refused connections
    /// - `NoCandidates` / `Blocked` when the model refuses to answer
    /// - `Api`, `EmptyResponse` or `Http` for anything else
    pub async fn request_advice(
        &self,
        question: &str,
        persona: Persona,
    ) -> Result<String, AdvisorError> {
        let api_key = self.api_key.as_deref().ok_or(AdvisorError::MissingApiKey)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart {
                    text: user_prompt(question, persona.label()),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![TextPart {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        info!(model = %self.model, persona = %persona, "Requesting advice");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let body: GenerateContentResponse = response.json().await?;

        let Some(candidate) = body.candidates.into_iter().next() else {
            let feedback = body
                .prompt_feedback
                .map_or_else(|| "none".to_string(), |feedback| feedback.to_string());
            return Err(AdvisorError::NoCandidates { feedback });
        };

        if let Some(reason) = candidate.finish_reason.filter(|r| r != FINISH_STOP) {
            return Err(AdvisorError::Blocked { reason });
        }

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(AdvisorError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl AdviceGenerator for GeminiAdvisor {
    async fn generate_advice(&self, question: &str, persona: Persona) -> String {
        match self.request_advice(question, persona).await {
            Ok(advice) => advice,
            Err(e) => {
                warn!(error = %e, "Advice generation failed, returning message instead");
                e.user_message()
            }
        }
    }
}

fn status_error(status: StatusCode, body: String) -> AdvisorError {
    match status {
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::INTERNAL_SERVER_ERROR => {
            AdvisorError::Unavailable(format!("status {status}: {body}"))
        }
        _ => AdvisorError::Api {
            status: status.as_u16(),
            body,
        },
    }
}

fn transport_error(err: reqwest::Error) -> AdvisorError {
    if err.is_timeout() || err.is_connect() {
        AdvisorError::Unavailable(err.to_string())
    } else {
        AdvisorError::Http(err)
    }
}
