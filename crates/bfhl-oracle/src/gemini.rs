//! Google Gemini `generateContent` adapter.
//!
//! Sends one non-streaming request per question and reduces the reply to a
//! single word. Any upstream failure degrades to [`HeuristicOracle`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::heuristic::HeuristicOracle;
use crate::oracle::{first_word, TextOracle, NO_RESPONSE, UNAVAILABLE};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Header carrying the API key. The key never appears in the request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";
/// Output cap. Leaves room for models that spend tokens on reasoning.
const MAX_OUTPUT_TOKENS: u32 = 256;
/// Appended to every question.
const ONE_WORD_INSTRUCTION: &str = "Reply with only ONE WORD. No punctuation.";

/// Remote-backed oracle using the Gemini API.
pub struct GeminiOracle {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    fallback: HeuristicOracle,
}

impl std::fmt::Debug for GeminiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiOracle")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GeminiOracle {
    /// Creates a Gemini oracle with the default model and API root.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::Transport` if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            fallback: HeuristicOracle::with_default(UNAVAILABLE),
        })
    }

    /// Uses a different model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Uses a different API root (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the model this oracle queries.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Performs the API call and returns the first candidate's text, if any.
    ///
    /// # Errors
    ///
    /// Returns an `OracleError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn generate(&self, question: &str) -> Result<Option<String>, OracleError> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&GenerateRequest::one_word(question))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {e}>"));
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Decode(e.without_url().to_string()))?;
        Ok(parsed.into_first_text())
    }
}

#[async_trait]
impl TextOracle for GeminiOracle {
    async fn ask(&self, question: &str) -> String {
        match self.generate(question).await {
            Ok(text) => text
                .as_deref()
                .and_then(first_word)
                .unwrap_or_else(|| NO_RESPONSE.to_string()),
            Err(e) => {
                tracing::warn!(model = %self.model, error = %e, "text generation failed, using heuristic answer");
                self.fallback.answer(question).to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn one_word(question: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(format!("{question}. {ONE_WORD_INSTRUCTION}")),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                candidate_count: 1,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    candidate_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, when present and non-blank.
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.trim().is_empty())
    }
}
