//! Structured scene generation through Gemini `generateContent`.

use super::dto::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfigDto, Part, ThinkingConfig};
use crate::http::{build_client, post_json_with_retry};
use async_trait::async_trait;
use reqwest::Client;
use sceneweaver_error::{HttpError, SceneweaverResult};
use sceneweaver_interface::{GenerationCall, SceneGenerator};
use sceneweaver_rate_limit::GenerationConfig;
use tracing::{debug, instrument, warn};

/// Scene generator backed by the Gemini REST API.
///
/// Requests `application/json` output constrained by the call's response
/// schema and sets the thinking budget from the call's quality mode.
/// Transient failures are retried with exponential backoff before the call
/// is reported as failed.
pub struct GeminiSceneGenerator {
    client: Client,
    api_key: String,
    config: GenerationConfig,
}

impl std::fmt::Debug for GeminiSceneGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSceneGenerator")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiSceneGenerator {
    /// Create a generator from an API key and generation settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: GenerationConfig) -> SceneweaverResult<Self> {
        let client = build_client(config.timeout())?;
        debug!(model = %config.model, "Created Gemini scene generator");
        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl SceneGenerator for GeminiSceneGenerator {
    #[instrument(
        skip(self, call),
        fields(model = %self.config.model, requested = call.requested_count, quality = %call.quality_mode)
    )]
    async fn generate(&self, call: &GenerationCall) -> SceneweaverResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(call.context_prompt.clone()),
                    thought: None,
                }],
            }],
            generation_config: GenerationConfigDto {
                response_mime_type: "application/json",
                response_schema: &call.response_schema,
                temperature: self.config.temperature,
                thinking_config: ThinkingConfig {
                    thinking_budget: self.config.thinking_budget(call.quality_mode),
                },
            },
        };

        let response: GenerateContentResponse = post_json_with_retry(
            &self.client,
            &self.endpoint(),
            &self.api_key,
            &request,
            self.config.max_retries,
            self.config.retry_backoff_ms,
        )
        .await?;

        match response.answer_text() {
            Some(text) => {
                debug!(length = text.len(), "Received scene payload");
                Ok(text)
            }
            None => {
                let reason = response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.clone())
                    .unwrap_or_else(|| "no candidates".to_string());
                warn!(reason = %reason, "Generation returned no text");
                Err(HttpError::new(format!("Generation returned no text ({})", reason)).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
