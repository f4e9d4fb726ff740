//! Google Gemini implementation of [`GenerativeClient`].

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};

use super::GenerativeClient;
use crate::error::{Result, TutorError};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_API_KEY: &str = "demo-key";
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_MULTIMODAL_MODEL: &str = "gemini-1.5-pro";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Gemini `generateContent` API.
///
/// Text prompts go to the flash model; prompts with an image part go to the
/// pro model, which handles images and text in one request. Both model names
/// can be overridden through the environment to stay compatible with API
/// revisions.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    text_model: String,
    multimodal_model: String,
}

impl GeminiClient {
    /// Creates a client with explicit credentials and model names.
    pub fn new(
        api_key: impl Into<String>,
        text_model: impl Into<String>,
        multimodal_model: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TutorError::ai_generation(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            text_model: text_model.into(),
            multimodal_model: multimodal_model.into(),
        })
    }

    /// Creates a client configured from the environment.
    ///
    /// Reads `GEMINI_API_KEY`, `GEMINI_TEXT_MODEL` and
    /// `GEMINI_MULTIMODAL_MODEL`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let text_model =
            std::env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let multimodal_model = std::env::var("GEMINI_MULTIMODAL_MODEL")
            .unwrap_or_else(|_| DEFAULT_MULTIMODAL_MODEL.to_string());

        Self::new(api_key, text_model, multimodal_model)
    }

    async fn post_generate(&self, model: &str, parts: Value) -> Result<String> {
        let url = format!("{API_BASE_URL}/{model}:generateContent?key={}", self.api_key);

        let body = json!({
            "contents": [{ "parts": parts }]
        });

        log::debug!("Sending generateContent request to model {model}");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TutorError::ai_generation(format!(
                "Gemini API returned {status}: {detail}"
            )));
        }

        let payload: Value = response.json().await?;

        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                TutorError::ai_generation("Gemini response contained no text candidate")
            })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.post_generate(&self.text_model, json!([{ "text": prompt }]))
            .await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image_data: &[u8],
        mime_type: &str,
    ) -> Result<String> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image_data);

        let parts = json!([
            { "text": prompt },
            { "inline_data": { "mime_type": mime_type, "data": encoded } }
        ]);

        self.post_generate(&self.multimodal_model, parts).await
    }
}
