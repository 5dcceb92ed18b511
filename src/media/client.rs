use crate::config::ImageConfig;
use crate::error::{ConfigError, ImageError, source_chain};
use crate::llm::http_client::build_provider_client;
use crate::llm::{RetryPolicy, invoke_with_retry, sanitize_api_error};
use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The only model that accepts an explicit aspect ratio.
const ASPECT_RATIO_MODEL: &str = "gemini-3-pro-image-preview";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<AspectRatio>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AspectRatio {
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: Option<String>,
}

/// Gemini `generateContent` client that returns raw image bytes.
pub struct ImageClient {
    api_key: String,
    endpoint: String,
    model: String,
    aspect_ratio: String,
    retry: RetryPolicy,
    client: Client,
}

impl ImageClient {
    /// Requires `image.api_key` (filled from `GEMINI_API_KEY` by the env layer).
    pub fn from_config(config: &ImageConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey {
                provider: "gemini",
                env_var: "GEMINI_API_KEY",
            })?;
        Ok(Self {
            api_key: api_key.to_string(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            model: config.model.clone(),
            aspect_ratio: config.aspect_ratio.clone(),
            retry: RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.initial_backoff_ms),
            ),
            client: build_provider_client(config.timeout_secs),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["Image"],
                image_config: (self.model == ASPECT_RATIO_MODEL).then(|| AspectRatio {
                    aspect_ratio: self.aspect_ratio.clone(),
                }),
            },
        }
    }

    /// Generate one image, retrying rate limits, server errors and
    /// transport failures.
    pub async fn generate(&self, prompt: &str) -> anyhow::Result<Vec<u8>> {
        let request = self.build_request(prompt);
        let request = &request;
        invoke_with_retry(self.retry, "image", move || self.request_once(request))
            .await
            .context("image generation failed")
    }

    async fn request_once(&self, request: &GenerateRequest) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| ImageError::Transport(source_chain(&err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageError::Api {
                status: status.as_u16(),
                message: sanitize_api_error(&body),
            }
            .into());
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| ImageError::Transport(source_chain(&err)))?;
        Ok(extract_image(body)?)
    }
}

/// First inline image of the first candidate, decoded.
fn extract_image(body: GenerateResponse) -> Result<Vec<u8>, ImageError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or(ImageError::MissingData("candidates"))?;
    let parts = candidate
        .content
        .map(|c| c.parts)
        .filter(|parts| !parts.is_empty())
        .ok_or(ImageError::MissingData("content parts"))?;
    let data = parts
        .into_iter()
        .find_map(|part| part.inline_data.and_then(|inline| inline.data))
        .ok_or(ImageError::MissingData("inlineData"))?;
    STANDARD
        .decode(data.trim())
        .map_err(|err| ImageError::Decode(err.to_string()))
}
